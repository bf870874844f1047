use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 有选项但没有任何选项被标记为正确答案时的占位答案
pub const UNKNOWN_ANSWER: &str = "Unknown";

/// 特殊题（连线题、看图题等）的占位答案
pub const SEE_IMAGE_ANSWER: &str = "See image for the answer";

/// 题目类型
///
/// 普通选择题不写出该字段，只有无法提取选项的特殊题才标记为 `special`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Special,
}

/// 题目答案
///
/// 序列化形式：
/// - 单个正确选项 → 字符串
/// - 多个正确选项 → 字符串数组（顺序与选项列表一致）
/// - 未找到正确选项 → `"Unknown"`
/// - 特殊题 → `"See image for the answer"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
    Unknown,
    SeeImage,
}

impl Answer {
    /// 根据识别到的正确选项数量决定答案形态
    pub fn from_correct(mut correct: Vec<String>) -> Self {
        match correct.len() {
            0 => Answer::Unknown,
            1 => Answer::Single(correct.remove(0)),
            _ => Answer::Multiple(correct),
        }
    }

    /// 答案包含的具体选项文本（占位答案返回空）
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::Single(text) => vec![text.as_str()],
            Answer::Multiple(list) => list.iter().map(String::as_str).collect(),
            Answer::Unknown | Answer::SeeImage => Vec::new(),
        }
    }

    /// 是否为空答案（空字符串或空数组）
    pub fn is_blank(&self) -> bool {
        match self {
            Answer::Single(text) => text.is_empty(),
            Answer::Multiple(list) => list.is_empty(),
            Answer::Unknown | Answer::SeeImage => false,
        }
    }
}

impl Serialize for Answer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Answer::Single(text) => serializer.serialize_str(text),
            Answer::Multiple(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Answer::Unknown => serializer.serialize_str(UNKNOWN_ANSWER),
            Answer::SeeImage => serializer.serialize_str(SEE_IMAGE_ANSWER),
        }
    }
}

// 答案既可能是字符串也可能是数组，占位字符串还原为对应的枚举值
impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AnswerVisitor;

        impl<'de> Visitor<'de> for AnswerVisitor {
            type Value = Answer;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a list of strings")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(match value {
                    UNKNOWN_ANSWER => Answer::Unknown,
                    SEE_IMAGE_ANSWER => Answer::SeeImage,
                    other => Answer::Single(other.to_string()),
                })
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut list = Vec::new();
                while let Some(item) = seq.next_element::<String>()? {
                    list.push(item);
                }
                Ok(Answer::Multiple(list))
            }
        }

        deserializer.deserialize_any(AnswerVisitor)
    }
}

/// 提取出的一道题
///
/// 字段顺序即输出 JSON 的字段顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,

    /// `None` 表示没有选项列表；特殊题固定为空数组
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,

    /// 提取流程不会生成该字段，仅在校验外部 JSON 时出现
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl QuestionRecord {
    /// 普通选择题
    pub fn multiple_choice(question: String, choices: Vec<String>, correct: Vec<String>) -> Self {
        Self {
            question,
            pre: None,
            question_type: None,
            choices: Some(choices),
            answer: Some(Answer::from_correct(correct)),
            img: None,
        }
    }

    /// 特殊题：空选项 + 看图占位答案
    pub fn special(question: String) -> Self {
        Self {
            question,
            pre: None,
            question_type: Some(QuestionType::Special),
            choices: Some(Vec::new()),
            answer: Some(Answer::SeeImage),
            img: None,
        }
    }

    pub fn with_pre(mut self, pre: Option<String>) -> Self {
        self.pre = pre;
        self
    }

    pub fn is_special(&self) -> bool {
        self.question_type == Some(QuestionType::Special)
    }

    /// 选项列表（没有时为空切片）
    pub fn choice_list(&self) -> &[String] {
        self.choices.as_deref().unwrap_or(&[])
    }
}
