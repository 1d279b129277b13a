use serde::{Deserialize, Serialize};

use crate::models::StringOrNum;

/// Pagination envelope shared by all endpoints of the mock API.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PagedRsp<T> {
    pub page: StringOrNum,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<T>,
}
