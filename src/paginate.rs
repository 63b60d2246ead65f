//! Filtering and page slicing over a loaded dataset.
//!
//! Everything here is a pure function of its arguments. Page numbers are
//! 1-based and are never clamped: a page past the end is simply empty.

use crate::profile::Profile;

pub const PAGE_SIZE: usize = 12;

/// Records shown for the given filter flag, in dataset order.
///
/// With `show_verified` set every record is visible; otherwise verified
/// accounts are left out.
pub fn visible_users(dataset: &[Profile], show_verified: bool) -> Vec<&Profile> {
    dataset
        .iter()
        .filter(|user| show_verified || !user.is_verified)
        .collect()
}

pub fn total_count(dataset: &[Profile], show_verified: bool) -> usize {
    if show_verified {
        dataset.len()
    } else {
        dataset.iter().filter(|user| !user.is_verified).count()
    }
}

pub fn total_pages(total_count: usize) -> usize {
    total_count.div_ceil(PAGE_SIZE)
}

pub fn page<T>(visible: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= visible.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(visible.len());
    &visible[start..end]
}

/// Snapshot of what one screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub users: Vec<&'a Profile>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<'a> PageView<'a> {
    pub fn build(dataset: &'a [Profile], show_verified: bool, current_page: usize) -> Self {
        let visible = visible_users(dataset, show_verified);
        let total_count = visible.len();
        let users = page(&visible, current_page).to_vec();
        Self {
            users,
            current_page,
            total_pages: total_pages(total_count),
            total_count,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 0
    }
}
