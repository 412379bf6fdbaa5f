use crate::objects::Objects;
use crate::sensing::Sensing;

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Event {
    Objects(Vec<Objects>),
    Sensing(Vec<Sensing>),
}

impl From<Vec<Objects>> for Event {
    fn from(events: Vec<Objects>) -> Self {
        Self::Objects(events)
    }
}

impl From<Vec<Sensing>> for Event {
    fn from(events: Vec<Sensing>) -> Self {
        Self::Sensing(events)
    }
}

/// Collects domain event batches into session events, skipping empty ones.
#[macro_export]
macro_rules! occur {
    () => (
        vec![]
    );
    ($($x:expr,)*) => {{
        let mut events: Vec<$crate::api::Event> = vec![];
        $(
            let event: $crate::api::Event = $x.into();
            let empty = match &event {
                $crate::api::Event::Objects(batch) => batch.is_empty(),
                $crate::api::Event::Sensing(batch) => batch.is_empty(),
            };
            if !empty {
                events.push(event);
            }
        )*
        events
    }};
}

/// Tick outcome handed to an external reporting channel.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct SandboxReport {
    pub tick: usize,
    pub time: f32,
    pub events: Vec<Event>,
}

impl SandboxReport {
    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }

    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<SandboxReport, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (report, _) = bincode::decode_from_slice(data, config)?;
        Ok(report)
    }
}
