//! # Entities
//!
//! 외부 저장소에서 읽어 온 도메인 객체입니다.
//! 이 서비스는 사용자 문서를 직접 저장하지 않고 원격 프로필 API에서 읽기만 합니다.

pub mod users;
