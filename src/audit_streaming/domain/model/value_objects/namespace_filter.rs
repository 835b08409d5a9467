/// Restricts a destination to events of one group subtree or one project.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NamespaceFilter {
    Group(i64),
    Project(i64),
}

impl NamespaceFilter {
    pub fn namespace_type(&self) -> &'static str {
        match self {
            Self::Group(_) => "group",
            Self::Project(_) => "project",
        }
    }

    pub fn namespace_id(&self) -> i64 {
        match self {
            Self::Group(id) | Self::Project(id) => *id,
        }
    }
}
