use quiz_core::QuestionData;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetLinkVm {
    pub href: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexGroupVm {
    pub title: String,
    pub links: Vec<SetLinkVm>,
}

#[must_use]
pub fn map_index(data: &QuestionData) -> Vec<IndexGroupVm> {
    data.groups()
        .iter()
        .map(|group| IndexGroupVm {
            title: group.title().to_string(),
            links: group
                .sets()
                .iter()
                .map(|set| SetLinkVm {
                    href: set.id().href(),
                    title: set.title().to_string(),
                })
                .collect(),
        })
        .collect()
}
