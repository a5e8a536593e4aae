use serde::{Deserialize, Serialize};

/// The kind label attached to one top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    Import,
    Constant,
    Type,
    Variable,
    Function,
    Method,
    Unclassified,
}

impl DeclKind {
    /// Whether records of this kind carry a name.
    #[must_use]
    pub const fn is_named(self) -> bool {
        matches!(self, Self::Type | Self::Function | Self::Method)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Import => "Import",
            Self::Constant => "Constant",
            Self::Type => "Type",
            Self::Variable => "Variable",
            Self::Function => "Function",
            Self::Method => "Method",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeclKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Import" => Ok(Self::Import),
            "Constant" => Ok(Self::Constant),
            "Type" => Ok(Self::Type),
            "Variable" => Ok(Self::Variable),
            "Function" => Ok(Self::Function),
            "Method" => Ok(Self::Method),
            "Unclassified" => Ok(Self::Unclassified),
            other => Err(format!("unknown declaration kind `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: &[DeclKind] = &[
        DeclKind::Import,
        DeclKind::Constant,
        DeclKind::Type,
        DeclKind::Variable,
        DeclKind::Function,
        DeclKind::Method,
        DeclKind::Unclassified,
    ];

    #[test]
    fn display_and_from_str_agree() {
        for kind in KINDS {
            assert_eq!(kind.to_string().parse::<DeclKind>(), Ok(*kind));
        }
    }

    #[test]
    fn serde_label_matches_display() {
        for kind in KINDS {
            let value = serde_json::to_value(kind).expect("serialize kind");
            assert_eq!(value.as_str(), Some(kind.as_str()));
        }
    }

    #[test]
    fn only_types_and_callables_are_named() {
        let named: Vec<_> = KINDS.iter().filter(|k| k.is_named()).collect();
        assert_eq!(
            named,
            [&DeclKind::Type, &DeclKind::Function, &DeclKind::Method]
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("Struct".parse::<DeclKind>().is_err());
        assert!("import".parse::<DeclKind>().is_err());
    }
}
