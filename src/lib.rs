//! Narrowcache: Incremental Substring-Narrowing Cache
//!
//! Answers progressively typed search-box queries over a fixed dataset by
//! reusing the previous query's result. A stack of frames records, for each
//! prefix typed so far, which items still match; shortening or diverging the
//! query merges frames back down instead of rescanning.
//!
//! ```
//! use narrowcache::{CacheManager, Contains};
//!
//! let mut cache = CacheManager::new(vec!["apple", "banana", "apples"], Contains::new());
//! assert_eq!(cache.resolve("apples"), Some(&["apples"][..]));
//! assert_eq!(cache.resolve("ban"), Some(&["banana"][..]));
//! assert_eq!(cache.resolve("kiwi"), None);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod matcher;
pub mod stats;

pub use cache::CacheManager;
pub use error::{ApiError, StackError};
pub use matcher::{Contains, Matcher, TextOf};
pub use stats::CacheStats;
