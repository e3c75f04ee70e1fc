//! # Service Registry
//!
//! `#[service]` 매크로로 선언된 싱글톤 서비스를 보관하고 해석하는 타입 기반 컨테이너입니다.
//!
//! ## 동작 방식
//!
//! ```text
//! main()
//!  ├─ ServiceLocator::set(Arc<RedisClient>)          인프라 객체 수동 등록
//!  ├─ ServiceLocator::set(Arc<ProfileRepository>)
//!  └─ ServiceLocator::initialize_all()               inventory 로 수집된 서비스 생성
//!
//! PlaceService::instance()
//!  └─ ServiceLocator::get::<PlaceService>()
//!      ├─ 캐시된 인스턴스가 있으면 반환
//!      └─ 없으면 "PlaceService" → "place" 이름으로 등록 정보를 찾아 생성
//!          └─ Arc<T> 필드는 다시 ServiceLocator::get::<T>() 로 주입
//! ```
//!
//! 서비스의 `name` 인자는 타입 이름에서 `Service` 접미사를 뗀 소문자와 같아야 합니다.
//! (`PlaceService` → `#[service(name = "place")]`)
//!
//! 외부 API 클라이언트나 Redis 처럼 생성에 설정값이 필요한 객체는 매크로로 만들지 않고
//! `main`에서 `set`으로 먼저 등록합니다. `get`은 등록된 인스턴스를 항상 우선합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// `#[service]` 매크로가 자동 구현하는 서비스 공통 인터페이스
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 `inventory::submit!`으로 제출하는 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<String, &'static ServiceRegistration> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (registry_key(registration.name), registration))
        .collect();

    log::debug!("Service registry cache built with {} entries", cache.len());
    cache
});

/// 등록 이름을 조회 키로 정규화합니다. (`"place_service"` → `"place"`)
fn registry_key(name: &str) -> String {
    name.strip_suffix("_service").unwrap_or(name).to_string()
}

/// 타입 경로에서 마지막 세그먼트만 꺼냅니다. (`crate::services::PlaceService` → `PlaceService`)
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    fn cached<T: 'static + Send + Sync>(&self) -> Option<Arc<T>> {
        let instances = self.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 타입 `T`의 싱글톤 인스턴스를 반환합니다.
    ///
    /// # Panics
    ///
    /// * 등록되지 않은 타입을 요청한 경우
    /// * 서비스 간 순환 의존성이 있는 경우
    ///
    /// 두 경우 모두 애플리케이션 배선 오류이므로 기동 시점에 드러납니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        if let Some(instance) = LOCATOR.cached::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner());
            if !initializing.insert(type_id) {
                log::error!("Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let instance = Self::construct::<T>(type_name);

        LOCATOR
            .initializing
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&type_id);

        match instance {
            Some(instance) => {
                let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
                // 생성 도중 다른 스레드가 먼저 등록했다면 그 인스턴스를 사용
                let stored = instances
                    .entry(type_id)
                    .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
                    .clone();
                stored.downcast::<T>().unwrap_or(instance)
            }
            None => panic!(
                "Service not found: {}. Register it with #[service] or ServiceLocator::set()",
                type_name
            ),
        }
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Option<Arc<T>> {
        let short_name = short_type_name(type_name);
        let entity_name = short_name.strip_suffix("Service")?.to_lowercase();

        let registration = SERVICE_NAME_CACHE.get(&entity_name)?;
        log::debug!("Creating service instance: {}", registration.name);

        match (registration.constructor)().downcast::<Arc<T>>() {
            Ok(instance) => Some(*instance),
            Err(_) => panic!("Type mismatch for service: {}", registration.name),
        }
    }

    /// 이미 만들어진 인스턴스를 등록합니다.
    ///
    /// Redis 클라이언트, 외부 API 클라이언트처럼 설정값으로 생성되는 객체에 사용합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", short_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 수집된 모든 서비스를 미리 생성합니다.
    ///
    /// 배선 오류(미등록 의존성 등)를 첫 요청이 아닌 기동 시점에 드러내기 위해 호출합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        log::info!("🔄 Initializing service registry");

        let mut count = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            log::info!("  ✓ {}", registration.name);
            count += 1;
        }

        log::info!("✅ {} services initialized", count);
        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
