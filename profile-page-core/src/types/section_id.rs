//! 节 ID

use std::fmt;

use serde::Serialize;

/// 节 ID：由标题推导，作为锚点和导航键
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// 个人资料节的保留 ID
    pub const PROFILE: &'static str = "profile";

    /// 个人资料节 ID
    pub fn profile() -> Self {
        Self(Self::PROFILE.to_string())
    }

    /// 由多行标题推导：用 `-` 拼接各行，转小写，空格替换为 `-`
    pub fn from_title<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("-");
        Self(joined.to_lowercase().replace(' ', "-"))
    }

    /// 包装一个已知 ID（例如来自事件的目标）
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_profile(&self) -> bool {
        self.0 == Self::PROFILE
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_lines_with_dash_and_lowercases() {
        assert_eq!(SectionId::from_title(&["About", "Me"]), "about-me");
        assert_eq!(SectionId::from_title(&["Open Source Work"]), "open-source-work");
    }

    #[test]
    fn space_joined_label_derives_same_id() {
        let lines = ["Side", "Projects"];
        let from_lines = SectionId::from_title(&lines);
        let from_label = SectionId::from_title(&[lines.join(" ")]);
        assert_eq!(from_lines, from_label);
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = SectionId::from_title(&["Talks & Papers"]);
        let b = SectionId::from_title(&["Talks & Papers"]);
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "talks-&-papers");
    }

    #[test]
    fn profile_title_collides_with_reserved_id() {
        assert!(SectionId::from_title(&["Profile"]).is_profile());
    }

    #[test]
    fn empty_title_derives_empty_id() {
        let empty: [&str; 0] = [];
        assert!(SectionId::from_title(&empty).is_empty());
    }
}
