use super::NameRecord;
use serde_json::{Map, Value};

impl NameRecord {
    /// The parts that were found, plus the original text, as a JSON object.
    pub fn to_json(&self) -> Value {
        let mut d = Map::new();
        let parts = [
            ("title", &self.title),
            ("first", &self.first),
            ("middle", &self.middle),
            ("nick", &self.nick),
            ("last", &self.last),
            ("suffix", &self.suffix),
        ];
        for (key, part) in parts.iter() {
            if !part.is_empty() {
                d.insert(key.to_string(), Value::String(part.to_string()));
            }
        }
        d.insert("original".to_string(), Value::String(self.original().to_string()));
        Value::Object(d)
    }
}
