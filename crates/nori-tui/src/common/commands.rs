//! Command definitions for the command palette.

use nori_core::session::Category;

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct Command {
    /// Primary name (e.g., "clear") - without the leading slash.
    pub name: &'static str,
    /// Aliases - without leading slashes.
    pub aliases: &'static [&'static str],
    /// Short description shown in palette.
    pub description: &'static str,
}

impl Command {
    /// Returns true if this command matches the given filter (case-insensitive).
    pub fn matches(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter_lower)
            || self
                .aliases
                .iter()
                .any(|a| a.to_lowercase().contains(&filter_lower))
    }

    /// Returns the display name with aliases, e.g., "clear (reset)".
    pub fn display_name(&self) -> String {
        if self.aliases.is_empty() {
            self.name.to_string()
        } else {
            format!("{} ({})", self.name, self.aliases.join(", "))
        }
    }

    /// The category this command switches to, if it is a category command.
    pub fn category(&self) -> Option<Category> {
        self.name.parse().ok()
    }
}

/// Available commands.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "health",
        aliases: &["건강"],
        description: "건강 상담으로 전환",
    },
    Command {
        name: "travel",
        aliases: &["여행"],
        description: "여행 상담으로 전환",
    },
    Command {
        name: "investment",
        aliases: &["투자"],
        description: "투자 상담으로 전환",
    },
    Command {
        name: "legal",
        aliases: &["법률"],
        description: "법률 상담으로 전환",
    },
    Command {
        name: "clear",
        aliases: &["reset", "new"],
        description: "대화 초기화",
    },
    Command {
        name: "export",
        aliases: &["save"],
        description: "대화 내역을 파일로 저장",
    },
    Command {
        name: "shuffle",
        aliases: &[],
        description: "추천 질문 섞기",
    },
    Command {
        name: "model",
        aliases: &["model-info"],
        description: "모델 정보 보기",
    },
    Command {
        name: "ping",
        aliases: &["status"],
        description: "백엔드 연결 확인",
    },
    Command {
        name: "quit",
        aliases: &["q", "exit"],
        description: "종료",
    },
];
