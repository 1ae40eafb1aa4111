use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::games::tictactoe::{GameError, GameSnapshot, Mark, Room};
use crate::id_generator::generate_room_code;
use crate::{RoomCode, log};

type CodeGenerator = Arc<dyn Fn() -> RoomCode + Send + Sync>;

/// Every live room, keyed by join code.
///
/// The map lock is only held to find, insert or remove a room; moves lock
/// the single room they touch.
#[derive(Clone)]
pub struct RoomRegistry {
    rooms: Arc<Mutex<HashMap<RoomCode, Arc<Mutex<Room>>>>>,
    code_generator: CodeGenerator,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::with_code_generator(generate_room_code)
    }
}

impl std::fmt::Debug for RoomRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomRegistry").field("rooms", &self.rooms).finish_non_exhaustive()
    }
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry drawing candidate codes from `code_generator`; candidates that
    /// clash with a live room are discarded.
    pub fn with_code_generator<F>(code_generator: F) -> Self
    where
        F: Fn() -> RoomCode + Send + Sync + 'static,
    {
        Self {
            rooms: Arc::new(Mutex::new(HashMap::new())),
            code_generator: Arc::new(code_generator),
        }
    }

    /// Opens a room with the host as X and returns its fresh code.
    pub async fn create_room(&self, host_name: String) -> RoomCode {
        let mut rooms = self.rooms.lock().await;

        let code = loop {
            let candidate = (self.code_generator)();
            if !rooms.contains_key(&candidate) {
                break candidate;
            }
        };

        log!("Room {} created by {}", code, host_name);
        let room = Room::new(code.clone(), host_name);
        rooms.insert(code.clone(), Arc::new(Mutex::new(room)));
        code
    }

    pub async fn join_room(&self, code: &str, guest_name: String) -> Result<GameSnapshot, GameError> {
        let room = self.find(code).await?;
        let mut room = room.lock().await;
        room.join(guest_name)?;
        log!("Room {} joined, game is on", room.code());
        Ok(room.snapshot())
    }

    pub async fn apply_move(&self, code: &str, mark: Mark, cell: usize) -> Result<GameSnapshot, GameError> {
        let room = self.find(code).await?;
        let mut room = room.lock().await;
        room.apply_move(mark, cell)?;
        Ok(room.snapshot())
    }

    pub async fn reset_room(&self, code: &str) -> Result<GameSnapshot, GameError> {
        let room = self.find(code).await?;
        let mut room = room.lock().await;
        room.reset();
        Ok(room.snapshot())
    }

    pub async fn reset_scores(&self, code: &str) -> Result<GameSnapshot, GameError> {
        let room = self.find(code).await?;
        let mut room = room.lock().await;
        room.reset_scores();
        Ok(room.snapshot())
    }

    pub async fn snapshot(&self, code: &str) -> Result<GameSnapshot, GameError> {
        let room = self.find(code).await?;
        let room = room.lock().await;
        Ok(room.snapshot())
    }

    pub async fn remove_room(&self, code: &str) -> bool {
        let code = RoomCode::normalize(code);
        let removed = self.rooms.lock().await.remove(&code).is_some();
        if removed {
            log!("Room {} removed", code);
        }
        removed
    }

    /// Drops rooms idle for longer than `timeout`. A room that is locked
    /// right now is in use and is skipped.
    pub async fn remove_inactive_rooms(&self, timeout: Duration) -> Vec<RoomCode> {
        let mut rooms = self.rooms.lock().await;

        let expired: Vec<RoomCode> = rooms
            .iter()
            .filter(|(_, room)| {
                room.try_lock()
                    .map(|room| room.last_activity().elapsed() >= timeout)
                    .unwrap_or(false)
            })
            .map(|(code, _)| code.clone())
            .collect();

        for code in &expired {
            rooms.remove(code);
            log!("Room {} expired after inactivity", code);
        }
        expired
    }

    pub async fn room_count(&self) -> usize {
        self.rooms.lock().await.len()
    }

    async fn find(&self, code: &str) -> Result<Arc<Mutex<Room>>, GameError> {
        let code = RoomCode::normalize(code);
        let rooms = self.rooms.lock().await;
        rooms.get(&code).cloned().ok_or(GameError::RoomNotFound)
    }
}
