/// Namespace chain an audit event belongs to.
///
/// `group_ids` runs from the closest group up to the root, so for a project in
/// `root/sub` it is `[sub, root]`. Instance and user events have no groups.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventAncestry {
    pub root_group_id: Option<i64>,
    pub group_ids: Vec<i64>,
    pub project_id: Option<i64>,
}

impl EventAncestry {
    pub fn instance() -> Self {
        Self::default()
    }

    pub fn for_group(group_ids: Vec<i64>) -> Self {
        Self {
            root_group_id: group_ids.last().copied(),
            group_ids,
            project_id: None,
        }
    }

    pub fn for_project(project_id: i64, group_ids: Vec<i64>) -> Self {
        Self {
            root_group_id: group_ids.last().copied(),
            group_ids,
            project_id: Some(project_id),
        }
    }

    pub fn with_root_group_override(mut self, root_group_id: Option<i64>) -> Self {
        if let Some(root_group_id) = root_group_id {
            self.root_group_id = Some(root_group_id);
            if !self.group_ids.contains(&root_group_id) {
                self.group_ids.push(root_group_id);
            }
        }
        self
    }
}
