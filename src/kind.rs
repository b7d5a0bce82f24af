use std::fmt;
use std::str::FromStr;

/// Everything the index can complete. `Command` must stay first and `Unit`
/// last: callers iterate kinds by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Command,
    Template,
    LoadFile,
    DemoFile,
    GeneralFile,
    EscCommand,
    Unit,
}

impl CompletionKind {
    pub const COUNT: usize = 7;

    pub const ALL: [CompletionKind; Self::COUNT] = [
        CompletionKind::Command,
        CompletionKind::Template,
        CompletionKind::LoadFile,
        CompletionKind::DemoFile,
        CompletionKind::GeneralFile,
        CompletionKind::EscCommand,
        CompletionKind::Unit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            CompletionKind::Command => "command",
            CompletionKind::Template => "template",
            CompletionKind::LoadFile => "loadfile",
            CompletionKind::DemoFile => "demofile",
            CompletionKind::GeneralFile => "generalfile",
            CompletionKind::EscCommand => "esccommand",
            CompletionKind::Unit => "unit",
        }
    }

    /// Kinds whose entries come from directory scans.
    pub fn is_file(self) -> bool {
        matches!(
            self,
            CompletionKind::LoadFile | CompletionKind::DemoFile | CompletionKind::GeneralFile
        )
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown completion kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for CompletionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CompletionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_first_unit_last() {
        assert_eq!(CompletionKind::ALL[0], CompletionKind::Command);
        assert_eq!(CompletionKind::ALL[CompletionKind::COUNT - 1], CompletionKind::Unit);
        for (i, kind) in CompletionKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("loadfile".parse::<CompletionKind>(), Ok(CompletionKind::LoadFile));
        assert_eq!("Unit".parse::<CompletionKind>(), Ok(CompletionKind::Unit));
        assert!("widget".parse::<CompletionKind>().is_err());
    }
}
