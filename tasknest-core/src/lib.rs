//! tasknest-core: task-pattern learning and heuristic task classification.

pub mod classifier;
pub mod error;
pub mod kv;
pub mod patterns;
pub mod store;
pub mod task;
pub mod time;

pub use classifier::{
    AnalyzedTask, Category, ClassifierConfig, DurationTier, HeuristicClassifier, ListAnalysis,
    Priority, Sentiment, SentimentCounts, SentimentResult, SupportedLanguage, TaskAnalysis,
    detect_language,
};
pub use error::StoreError;
pub use kv::{FileKv, KvStore, MemoryKv};
pub use patterns::{PatternStats, PatternTable};
pub use store::{PatternStore, user_key};
pub use task::{TaskInput, TaskRecord, TaskStatus, existing_titles};
pub use time::TimeBucket;
