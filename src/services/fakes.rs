//! 서비스 흐름 테스트용 메모리 구현

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use crate::caching::DashboardCache;
use crate::core::errors::AppError;
use crate::domain::dto::users::ProfileUpdatePayload;
use crate::domain::entities::users::{DashboardUsers, RawUserDocument};
use crate::repositories::profiles::ProfileStore;
use crate::services::geocoding::{GeoPoint, Geocoder};

fn redis_down() -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"))
}

/// 프로필 저장소. `failing`이면 모든 호출이 502 에러입니다.
#[derive(Default)]
pub struct InMemoryProfileStore {
    pub dashboard: Mutex<DashboardUsers>,
    pub profiles: Mutex<HashMap<String, RawUserDocument>>,
    pub updates: Mutex<Vec<ProfileUpdatePayload>>,
    pub dashboard_calls: AtomicUsize,
    pub lookups: AtomicUsize,
    pub failing: bool,
}

impl InMemoryProfileStore {
    pub fn with_dashboard(users: DashboardUsers) -> Self {
        Self {
            dashboard: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_profile(self, email: &str, document: RawUserDocument) -> Self {
        self.profiles.lock().unwrap().insert(email.to_string(), document);
        self
    }

    pub fn dashboard_calls(&self) -> usize {
        self.dashboard_calls.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> Vec<ProfileUpdatePayload> {
        self.updates.lock().unwrap().clone()
    }

    fn unavailable(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::ExternalServiceError("profile API unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn list_dashboard_users(&self) -> Result<DashboardUsers, AppError> {
        self.dashboard_calls.fetch_add(1, Ordering::SeqCst);
        self.unavailable()?;
        Ok(self.dashboard.lock().unwrap().clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<RawUserDocument>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.unavailable()?;
        Ok(self.profiles.lock().unwrap().get(email).cloned())
    }

    /// 저장한 값을 다음 조회에 그대로 돌려줍니다.
    async fn update_profile(&self, payload: &ProfileUpdatePayload) -> Result<(), AppError> {
        self.unavailable()?;
        self.updates.lock().unwrap().push(payload.clone());

        let document: RawUserDocument = serde_json::from_value(serde_json::json!({
            "_id": payload.email,
            "email": payload.email,
            "company": payload.company,
            "role": payload.role,
            "area": payload.area,
            "city": payload.city,
            "lat": payload.lat,
            "lon": payload.lon,
            "contact": payload.contact,
            "batch": payload.batch,
            "college": payload.college
        }))
        .unwrap();
        self.profiles.lock().unwrap().insert(payload.email.clone(), document);
        Ok(())
    }
}

/// 대시보드 캐시. `broken`이면 모든 호출이 Redis 에러입니다.
#[derive(Default)]
pub struct InMemoryDashboardCache {
    pub entry: Mutex<Option<DashboardUsers>>,
    pub invalidations: AtomicUsize,
    pub broken: bool,
}

impl InMemoryDashboardCache {
    pub fn holding(users: DashboardUsers) -> Self {
        Self {
            entry: Mutex::new(Some(users)),
            ..Self::default()
        }
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn entry(&self) -> Option<DashboardUsers> {
        self.entry.lock().unwrap().clone()
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardCache for InMemoryDashboardCache {
    async fn load(&self) -> Result<Option<DashboardUsers>, redis::RedisError> {
        if self.broken {
            return Err(redis_down());
        }
        Ok(self.entry())
    }

    async fn store(&self, users: &DashboardUsers) -> Result<(), redis::RedisError> {
        if self.broken {
            return Err(redis_down());
        }
        *self.entry.lock().unwrap() = Some(users.clone());
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), redis::RedisError> {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(redis_down());
        }
        *self.entry.lock().unwrap() = None;
        Ok(())
    }
}

/// 고정된 결과를 돌려주는 지오코더
pub struct FixedGeocoder {
    pub result: Result<Option<GeoPoint>, AppError>,
    pub queries: Mutex<Vec<(String, String)>>,
}

impl FixedGeocoder {
    pub fn found(latitude: f64, longitude: f64) -> Self {
        Self::returning(Ok(Some(GeoPoint { latitude, longitude })))
    }

    pub fn nothing() -> Self {
        Self::returning(Ok(None))
    }

    pub fn returning(result: Result<Option<GeoPoint>, AppError>) -> Self {
        Self {
            result,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn geocode(&self, area: &str, city: &str) -> Result<Option<GeoPoint>, AppError> {
        self.queries.lock().unwrap().push((area.to_string(), city.to_string()));
        self.result.clone()
    }
}
