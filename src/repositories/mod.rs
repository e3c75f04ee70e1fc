//! 데이터 액세스 계층
//!
//! 사용자 데이터는 이 서비스가 아닌 원격 프로필 API에 저장됩니다.
//! 리포지토리는 그 API를 감싸는 HTTP 클라이언트이며,
//! `main`에서 생성해 `ServiceLocator::set`으로 등록합니다.
//! 서비스의 흐름은 `ProfileStore` 트레이트에만 의존합니다.
//!
//! ```rust,ignore
//! use crate::repositories::profiles::{ProfileRepository, ProfileStore};
//!
//! ServiceLocator::set(Arc::new(ProfileRepository::new()?));
//! let repo = ServiceLocator::get::<ProfileRepository>();
//! let users = repo.list_dashboard_users().await?;
//! ```

pub mod profiles;
