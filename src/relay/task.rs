use std::fmt;

/// The kinds of request the relay knows a template for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Simplify,
    Chat,
    Scenario,
    Summary,
    KeyPoints,
    CaseReference,
    Actions,
}

impl Task {
    pub const ALL: [Task; 7] = [
        Task::Simplify,
        Task::Chat,
        Task::Scenario,
        Task::Summary,
        Task::KeyPoints,
        Task::CaseReference,
        Task::Actions,
    ];

    /// Exact, case-sensitive lookup of a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "simplify" => Some(Task::Simplify),
            "chat" => Some(Task::Chat),
            "scenario" => Some(Task::Scenario),
            "summary" => Some(Task::Summary),
            "keypoints" => Some(Task::KeyPoints),
            "caseref" => Some(Task::CaseReference),
            "actions" => Some(Task::Actions),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Task::Simplify => "simplify",
            Task::Chat => "chat",
            Task::Scenario => "scenario",
            Task::Summary => "summary",
            Task::KeyPoints => "keypoints",
            Task::CaseReference => "caseref",
            Task::Actions => "actions",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
