use rand::Rng;
use rand::distr::Alphanumeric;

use crate::{RoomCode, SessionId};

pub const ROOM_CODE_LENGTH: usize = 6;
const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SESSION_ID_LENGTH: usize = 24;

pub fn generate_room_code() -> RoomCode {
    let mut rng = rand::rng();
    let code: String = (0..ROOM_CODE_LENGTH)
        .map(|_| ROOM_CODE_ALPHABET[rng.random_range(0..ROOM_CODE_ALPHABET.len())] as char)
        .collect();
    RoomCode::normalize(&code)
}

pub fn generate_session_id() -> SessionId {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect();
    SessionId::new(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_code_shape() {
        for _ in 0..200 {
            let code = generate_room_code();
            assert_eq!(code.as_str().len(), ROOM_CODE_LENGTH);
            assert!(code.as_str().bytes().all(|b| ROOM_CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_session_ids_differ() {
        assert_ne!(generate_session_id(), generate_session_id());
    }
}
