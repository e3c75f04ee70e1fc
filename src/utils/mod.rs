//! 공통 유틸리티
//!
//! - [`string_utils`]: 외부 문서 필드 정규화, 위치 라벨, 지오코딩 검색어

pub mod string_utils;
