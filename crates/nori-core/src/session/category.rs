//! Conversation categories and their static display text.

use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Label used for exchanges whose category the backend did not report.
pub const GENERAL_LABEL: &str = "일반";

/// One of the four fixed conversation domains.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Enum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Health,
    Travel,
    Investment,
    Legal,
}

/// Static display text for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Greeting prompt shown after switching to the category.
    pub prompt: &'static str,
}

const HEALTH: CategoryInfo = CategoryInfo {
    title: "건강 상담",
    subtitle: "건강에 관한 궁금한 점을 물어보세요",
    prompt: "건강 전문 AI가 도움을 드릴게요!",
};

const TRAVEL: CategoryInfo = CategoryInfo {
    title: "여행 상담",
    subtitle: "여행 계획과 정보를 도움을 드려요",
    prompt: "여행 전문 AI가 맞춤 정보를 제공할게요!",
};

const INVESTMENT: CategoryInfo = CategoryInfo {
    title: "투자 상담",
    subtitle: "투자와 재테크 정보를 제공해요",
    prompt: "투자 전문 AI가 안전한 정보를 알려드릴게요!",
};

const LEGAL: CategoryInfo = CategoryInfo {
    title: "법률 상담",
    subtitle: "법률 관련 궁금증을 해결해드려요",
    prompt: "법률 전문 AI가 기본 정보를 제공할게요!",
};

impl Category {
    /// All categories in sidebar order.
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Travel,
        Category::Investment,
        Category::Legal,
    ];

    /// Wire name sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Travel => "travel",
            Category::Investment => "investment",
            Category::Legal => "legal",
        }
    }

    pub fn info(self) -> &'static CategoryInfo {
        match self {
            Category::Health => &HEALTH,
            Category::Travel => &TRAVEL,
            Category::Investment => &INVESTMENT,
            Category::Legal => &LEGAL,
        }
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    /// Greeting bot message for this category.
    pub fn greeting(self) -> String {
        format!("안녕하세요! {}", self.info().prompt)
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Health => 0,
            Category::Travel => 1,
            Category::Investment => 2,
            Category::Legal => 3,
        }
    }

    /// Recovers a category from a history label such as "건강 상담".
    ///
    /// Matches on the leading domain word so shortened labels still resolve.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| {
            category
                .title()
                .split_whitespace()
                .next()
                .is_some_and(|word| label.contains(word))
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected health, travel, investment or legal)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "travel" => Ok(Category::Travel),
            "investment" => Ok(Category::Investment),
            "legal" => Ok(Category::Legal),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_wire_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Travel ".parse::<Category>(), Ok(Category::Travel));
    }

    #[test]
    fn test_unknown_category_is_error() {
        let err = "cooking".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("cooking".to_string()));
    }

    #[test]
    fn test_greeting_uses_prompt() {
        assert_eq!(
            Category::Legal.greeting(),
            "안녕하세요! 법률 전문 AI가 기본 정보를 제공할게요!"
        );
    }

    #[test]
    fn test_from_label_matches_domain_word() {
        assert_eq!(Category::from_label("투자 상담"), Some(Category::Investment));
        assert_eq!(Category::from_label("여행"), Some(Category::Travel));
        assert_eq!(Category::from_label(GENERAL_LABEL), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
