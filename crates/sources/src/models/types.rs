use std::borrow::Cow;

/// Source identifier - mostly static display names like "PontosIdo.com"
pub type SourceId = Cow<'static, str>;
