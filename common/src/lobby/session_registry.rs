use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::games::SessionRng;
use crate::games::tictactoe::{Difficulty, GameError, GameSnapshot, SinglePlayerSession};
use crate::id_generator::generate_session_id;
use crate::{SessionId, log};

/// Single-player games, one per transport-level session.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    bot_name: String,
    sessions: Arc<Mutex<HashMap<SessionId, Arc<Mutex<SinglePlayerSession>>>>>,
}

impl SessionRegistry {
    pub fn new(bot_name: String) -> Self {
        Self {
            bot_name,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn start(&self, player_name: String, difficulty: Difficulty) -> SessionId {
        self.start_with_rng(player_name, difficulty, SessionRng::from_random()).await
    }

    pub async fn start_with_rng(
        &self,
        player_name: String,
        difficulty: Difficulty,
        rng: SessionRng,
    ) -> SessionId {
        let mut sessions = self.sessions.lock().await;

        let id = loop {
            let candidate = generate_session_id();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        log!(
            "Session {} started by {} ({}, seed {})",
            id,
            player_name,
            difficulty,
            rng.seed()
        );
        let session = SinglePlayerSession::new(player_name, self.bot_name.clone(), difficulty, rng);
        sessions.insert(id.clone(), Arc::new(Mutex::new(session)));
        id
    }

    pub async fn apply_move(&self, id: &SessionId, cell: usize) -> Result<GameSnapshot, GameError> {
        let session = self.find(id).await?;
        let mut session = session.lock().await;
        session.apply_human_move(cell)?;
        Ok(session.snapshot())
    }

    pub async fn reset(&self, id: &SessionId) -> Result<GameSnapshot, GameError> {
        let session = self.find(id).await?;
        let mut session = session.lock().await;
        session.reset();
        Ok(session.snapshot())
    }

    pub async fn reset_scores(&self, id: &SessionId) -> Result<GameSnapshot, GameError> {
        let session = self.find(id).await?;
        let mut session = session.lock().await;
        session.reset_scores();
        Ok(session.snapshot())
    }

    pub async fn snapshot(&self, id: &SessionId) -> Result<GameSnapshot, GameError> {
        let session = self.find(id).await?;
        let session = session.lock().await;
        Ok(session.snapshot())
    }

    pub async fn remove(&self, id: &SessionId) -> bool {
        let removed = self.sessions.lock().await.remove(id).is_some();
        if removed {
            log!("Session {} removed", id);
        }
        removed
    }

    pub async fn remove_inactive_sessions(&self, timeout: Duration) -> Vec<SessionId> {
        let mut sessions = self.sessions.lock().await;

        let expired: Vec<SessionId> = sessions
            .iter()
            .filter(|(_, session)| {
                session
                    .try_lock()
                    .map(|session| session.last_activity().elapsed() >= timeout)
                    .unwrap_or(false)
            })
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            sessions.remove(id);
            log!("Session {} expired after inactivity", id);
        }
        expired
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    async fn find(&self, id: &SessionId) -> Result<Arc<Mutex<SinglePlayerSession>>, GameError> {
        let sessions = self.sessions.lock().await;
        sessions.get(id).cloned().ok_or(GameError::SessionNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, SnapshotStatus};

    fn create_registry() -> SessionRegistry {
        SessionRegistry::new("Computer".to_string())
    }

    #[tokio::test]
    async fn test_start_and_query() {
        let registry = create_registry();
        let id = registry.start("Alice".to_string(), Difficulty::Hard).await;
        let snapshot = registry.snapshot(&id).await.unwrap();
        assert_eq!(snapshot.status, SnapshotStatus::InProgress);
        assert_eq!(snapshot.current, Mark::X);
        assert_eq!(snapshot.players.x, "Alice");
        assert_eq!(snapshot.players.o.as_deref(), Some("Computer"));
    }

    #[tokio::test]
    async fn test_move_returns_human_and_bot_placements() {
        let registry = create_registry();
        let id = registry
            .start_with_rng("Alice".to_string(), Difficulty::Easy, SessionRng::new(8))
            .await;
        let snapshot = registry.apply_move(&id, 4).await.unwrap();
        assert_eq!(snapshot.board[4], "X");
        assert_eq!(snapshot.board.iter().filter(|cell| *cell == "O").count(), 1);
        assert_eq!(snapshot.current, Mark::X);
    }

    #[tokio::test]
    async fn test_unknown_session_is_reported() {
        let registry = create_registry();
        let missing = SessionId::new("missing".to_string());
        assert_eq!(registry.apply_move(&missing, 0).await, Err(GameError::SessionNotFound));
        assert_eq!(registry.snapshot(&missing).await, Err(GameError::SessionNotFound));
        assert!(!registry.remove(&missing).await);
    }

    #[tokio::test]
    async fn test_reset_keeps_tally() {
        let registry = create_registry();
        let id = registry.start("Alice".to_string(), Difficulty::Hard).await;
        let mut snapshot = registry.snapshot(&id).await.unwrap();
        while snapshot.status == SnapshotStatus::InProgress {
            let cell = snapshot.board.iter().position(|cell| cell == " ").unwrap();
            snapshot = registry.apply_move(&id, cell).await.unwrap();
        }
        let wins = snapshot.wins;
        let reset = registry.reset(&id).await.unwrap();
        assert_eq!(reset.status, SnapshotStatus::InProgress);
        assert_eq!(reset.wins, wins);
    }

    #[tokio::test]
    async fn test_inactive_sessions_expire() {
        let registry = create_registry();
        let id = registry.start("Alice".to_string(), Difficulty::Easy).await;
        assert!(registry.remove_inactive_sessions(Duration::from_secs(60)).await.is_empty());
        assert_eq!(registry.remove_inactive_sessions(Duration::ZERO).await, vec![id]);
        assert_eq!(registry.session_count().await, 0);
    }
}
