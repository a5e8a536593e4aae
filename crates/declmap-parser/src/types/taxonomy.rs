use serde::{Deserialize, Serialize};

use super::DeclKind;

/// Keyword introducing a grouped declaration (`import`, `const`, `type`, `var`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKeyword {
    Import,
    Const,
    Type,
    Var,
}

/// Grammar node kind -> governing keyword.
const GROUP_NODE_KINDS: &[(&str, GroupKeyword)] = &[
    ("import_declaration", GroupKeyword::Import),
    ("const_declaration", GroupKeyword::Const),
    ("type_declaration", GroupKeyword::Type),
    ("var_declaration", GroupKeyword::Var),
];

impl GroupKeyword {
    /// Look up the keyword governing a tree-sitter node kind.
    #[must_use]
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        GROUP_NODE_KINDS
            .iter()
            .find(|(node_kind, _)| *node_kind == kind)
            .map(|(_, keyword)| *keyword)
    }
}

/// Which set of kind labels grouped declarations map onto.
///
/// `Legacy` reproduces the first release of the tool, where `const` and
/// `var` groups were reported as `Unclassified`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    #[default]
    Detailed,
    Legacy,
}

impl Taxonomy {
    /// Label for a grouped declaration under this taxonomy.
    #[must_use]
    pub const fn group_kind(self, keyword: GroupKeyword) -> DeclKind {
        match (self, keyword) {
            (_, GroupKeyword::Import) => DeclKind::Import,
            (_, GroupKeyword::Type) => DeclKind::Type,
            (Self::Detailed, GroupKeyword::Const) => DeclKind::Constant,
            (Self::Detailed, GroupKeyword::Var) => DeclKind::Variable,
            (Self::Legacy, GroupKeyword::Const | GroupKeyword::Var) => DeclKind::Unclassified,
        }
    }
}

impl std::fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Detailed => "detailed",
            Self::Legacy => "legacy",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Taxonomy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(Self::Detailed),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown taxonomy `{other}` (expected detailed or legacy)")),
        }
    }
}
