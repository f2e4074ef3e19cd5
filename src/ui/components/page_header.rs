// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page header: title, optional subtitle and optional back link.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageHeader {
    pub title: String,
    pub description: Option<String>,
    /// Target of the back arrow, when the page has a parent.
    pub back_href: Option<String>,
}

impl PageHeader {
    /// Header with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageHeader;

    // A title-only header leaves the optional parts empty.
    #[test]
    fn page_header_new_sets_only_title() {
        let header = PageHeader::new("새 곡 추가");
        assert_eq!(header.title, "새 곡 추가");
        assert_eq!(header.description, None);
        assert_eq!(header.back_href, None);
    }
}
