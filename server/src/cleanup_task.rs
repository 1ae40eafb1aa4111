use std::time::Duration;

use common::lobby::{RoomRegistry, SessionRegistry};
use common::log;

/// Periodically drops rooms and single-player sessions nobody has touched
/// for `inactivity_timeout`.
pub struct CleanupTask {
    room_registry: RoomRegistry,
    session_registry: SessionRegistry,
    check_interval: Duration,
    inactivity_timeout: Duration,
}

impl CleanupTask {
    pub fn new(
        room_registry: RoomRegistry,
        session_registry: SessionRegistry,
        check_interval: Duration,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            room_registry,
            session_registry,
            check_interval,
            inactivity_timeout,
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.check_interval);

        loop {
            interval.tick().await;
            self.cleanup_inactive().await;
        }
    }

    /// One sweep; returns how many rooms and sessions were dropped.
    pub async fn cleanup_inactive(&self) -> (usize, usize) {
        let rooms = self
            .room_registry
            .remove_inactive_rooms(self.inactivity_timeout)
            .await;
        let sessions = self
            .session_registry
            .remove_inactive_sessions(self.inactivity_timeout)
            .await;

        if !rooms.is_empty() || !sessions.is_empty() {
            log!(
                "Cleanup removed {} room(s) and {} session(s)",
                rooms.len(),
                sessions.len()
            );
        }
        (rooms.len(), sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Difficulty;

    #[tokio::test]
    async fn test_sweep_removes_only_idle_entries() {
        let rooms = RoomRegistry::new();
        let sessions = SessionRegistry::new("Computer".to_string());
        rooms.create_room("Host".to_string()).await;
        sessions.start("Alice".to_string(), Difficulty::Easy).await;

        let patient = CleanupTask::new(
            rooms.clone(),
            sessions.clone(),
            Duration::from_secs(1),
            Duration::from_secs(3600),
        );
        assert_eq!(patient.cleanup_inactive().await, (0, 0));

        let eager = CleanupTask::new(rooms.clone(), sessions.clone(), Duration::from_secs(1), Duration::ZERO);
        assert_eq!(eager.cleanup_inactive().await, (1, 1));
        assert_eq!(rooms.room_count().await, 0);
        assert_eq!(sessions.session_count().await, 0);
    }
}
