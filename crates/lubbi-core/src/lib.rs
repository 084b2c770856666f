//! lubbi-core: configuration, sensor store, knowledge base, chat resolver and vitals analysis
//! for the LUBBI triage robot site. No HTTP here; the gateway add-on wires it to axum.

mod error;
mod knowledge;
mod resolver;
mod sensors;
mod shared;
mod vitals;

pub use error::{CoreError, Result};
pub use knowledge::{bullet_list, numbered_list, About, KnowledgeBase, SensorSpecs};
pub use resolver::{
    KeywordRule, PatternRule, Resolution, Resolver, DEFAULT_RESPONSE, FOLLOW_UP, GREETING,
};
pub use sensors::{SensorReading, SensorSource, SensorStore, SensorUpdate};
pub use shared::{CoreConfig, ENV_CONFIG_PATH};
pub use vitals::{
    analyze, VitalsAnalysis, FEVER_ANALYSIS, FEVER_THRESHOLD_C, HEART_RATE_ANALYSIS,
    HEART_RATE_MAX_BPM, HEART_RATE_MIN_BPM, NORMAL_ANALYSIS,
};
