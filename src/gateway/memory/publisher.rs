use std::collections::VecDeque;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// events retained by a server configured with BOOKSHELF_EVENTS=memory
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

// MemoryPublisher keeps the most recent published events in process, oldest
// first. Once `capacity` events are held the oldest one is dropped.
#[derive(Debug)]
pub struct MemoryPublisher {
    capacity: usize,
    events: Mutex<VecDeque<DomainEvent>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            events: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub async fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().await.iter().cloned().collect()
    }
}

impl Default for MemoryPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        if self.capacity == 0 {
            return Ok(());
        }
        let mut events = self.events.lock().await;
        while events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
        Ok(())
    }
}
