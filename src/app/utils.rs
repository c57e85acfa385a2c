// SPDX-License-Identifier: GPL-3.0

mod pagination;

pub use pagination::{LoadMode, page_offset};
