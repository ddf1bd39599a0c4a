//! Shared string representation for transfer objects.
//!
//! Every DTO renders as single-line JSON of its declared fields, nested DTOs
//! included. This is diagnostic output for logs; the HTTP layer owns the wire
//! format.

use serde::Serialize;

use crate::error::Result;

pub trait Dto: Serialize {
    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Mark types as transfer objects and give them the shared `Display`.
macro_rules! dto {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::api::dto::Dto for $ty {}

            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    let rendered = $crate::api::dto::Dto::to_json_string(self)
                        .map_err(|_| ::std::fmt::Error)?;
                    f.write_str(&rendered)
                }
            }
        )+
    };
}

pub(crate) use dto;
