use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 프로필 수정 요청
///
/// 이메일은 본문에서 받지 않고 세션에서 가져옵니다.
/// 좌표도 받지 않습니다. `area`/`city`를 서버에서 지오코딩합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, message = "Company name must be at least 2 characters."))]
    pub company: String,

    #[validate(length(min = 2, message = "Role must be at least 2 characters."))]
    pub role: String,

    #[validate(length(min = 2, message = "Area must be at least 2 characters."))]
    pub area: String,

    #[validate(length(min = 2, message = "City must be at least 2 characters."))]
    pub city: String,

    #[validate(
        length(min = 10, message = "Contact number must be at least 10 characters."),
        custom(function = "validate_contact")
    )]
    pub contact: String,

    #[validate(length(min = 2, message = "College name must be at least 2 characters."))]
    pub college: String,

    #[validate(length(min = 1, message = "Batch is required."))]
    pub batch: String,
}

impl UpdateProfileRequest {
    /// 모든 필드의 앞뒤 공백을 제거합니다. 검증 전에 호출합니다.
    pub fn normalized(self) -> Self {
        Self {
            company: self.company.trim().to_string(),
            role: self.role.trim().to_string(),
            area: self.area.trim().to_string(),
            city: self.city.trim().to_string(),
            contact: self.contact.trim().to_string(),
            college: self.college.trim().to_string(),
            batch: self.batch.trim().to_string(),
        }
    }
}

/// 전화번호에는 숫자, 공백, `+`, `-`, 괄호만 허용합니다.
fn validate_contact(contact: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');

    if !contact.chars().all(allowed) {
        return Err(ValidationError::new("invalid_contact")
            .with_message("Contact number may only contain digits, spaces, '+', '-' and parentheses.".into()));
    }
    Ok(())
}

/// 원격 프로필 API `PUT /user/update` 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdatePayload {
    pub email: String,
    pub company: String,
    pub role: String,
    pub area: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub contact: String,
    pub batch: String,
    pub college: String,
}

impl ProfileUpdatePayload {
    pub fn new(email: &str, request: UpdateProfileRequest, latitude: f64, longitude: f64) -> Self {
        Self {
            email: email.to_string(),
            company: request.company,
            role: request.role,
            area: request.area,
            city: request.city,
            lat: latitude,
            lon: longitude,
            contact: request.contact,
            batch: request.batch,
            college: request.college,
        }
    }
}
