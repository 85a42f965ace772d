//! Standard response envelope helpers.

use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub data: Vec<T>,
    pub meta: MetaCount,
}

#[derive(Serialize)]
pub struct MetaCount {
    pub count: u64,
}

impl<T> SuccessMany<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len() as u64;
        SuccessMany {
            data,
            meta: MetaCount { count },
        }
    }
}
