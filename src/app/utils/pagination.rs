// SPDX-License-Identifier: GPL-3.0

/// How a freshly loaded page is merged into the working list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// The page replaces whatever was loaded before
    Replace,
    /// The page is appended after the already loaded entries ("load more")
    Append,
}

/// Index of the first catalog entry of a 1-based `page`
pub fn page_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}
