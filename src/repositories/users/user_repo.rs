//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션에 대한 조회/생성/수정 연산을 제공합니다.
//!
//! ## 유일성에 대한 주의
//!
//! 이메일 유일성은 스토어 레벨 제약이 아니라 서비스 계층의
//! 삽입 전 조회로만 보장됩니다. 동일 이메일로 동시에 가입하는
//! 경합에서는 중복 문서가 생길 수 있습니다 — 문서화된 공백이며
//! 여기서 고치지 않습니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

/// 컬렉션 이름
const COLLECTION_NAME: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// 명시적으로 생성된 [`Database`] 핸들을 주입받아 `users` 컬렉션에
/// 대한 모든 MongoDB 연산을 담당합니다.
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>`를 반환하며, 스토어 호출 실패는
/// `AppError::DatabaseError`로 변환되어 최종적으로 일반화된 500 응답이
/// 됩니다 (상세는 로그에만 기록).
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::users::user_repo::UserRepository;
///
/// let repo = UserRepository::new(database.clone());
///
/// // 이메일로 조회 (로그인/중복 검사)
/// let found = repo.find_by_email("john@example.com").await?;
///
/// // 생성 후 재조회
/// let id = repo.create(new_user).await?;
/// let created = repo.find_by_id(&id).await?;
/// ```
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (시작 시점에 주입)
    db: Arc<Database>,
}

impl UserRepository {
    /// 새 리포지토리 인스턴스 생성
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `email` - 조회할 사용자의 이메일 주소 (정규화된 형태)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 스토어 호출 실패
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// ObjectId 형식이 아닌 ID는 존재할 수 없는 문서이므로 에러가 아니라
    /// `Ok(None)`으로 처리됩니다 (호출자는 404로 매핑).
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => {
                log::debug!("유효하지 않은 사용자 ID 형식: {}", id);
                return Ok(None);
            }
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 문서 삽입
    ///
    /// 중복 검사는 서비스 계층의 책임입니다. 이 메서드는 삽입만 수행하고
    /// 스토어가 할당한 ID를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 생성된 문서의 ObjectId 16진수 문자열
    pub async fn create(&self, user: &User) -> Result<String, AppError> {
        let result = self
            .collection()
            .insert_one(user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| {
                AppError::InternalError("삽입된 문서의 ObjectId를 확인할 수 없습니다".to_string())
            })?
            .to_hex();

        log::info!("사용자 생성됨 - ID: {}", id);
        Ok(id)
    }

    /// 사용자 정보 부분 업데이트
    ///
    /// 주어진 필드들만 `$set`으로 변경합니다. `updatedAt` 갱신을 포함한
    /// 업데이트 문서 구성은 서비스 계층의 책임입니다.
    ///
    /// # 인자
    ///
    /// * `id` - 업데이트할 사용자의 ID
    /// * `update_doc` - 변경할 필드들을 담은 Document
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 문서가 존재하여 업데이트됨
    /// * `Ok(false)` - 해당 ID의 문서가 없음
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<bool, AppError> {
        let object_id = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(false),
        };

        let result = self
            .collection()
            .update_one(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    /// 전체 사용자 조회
    ///
    /// 사용자 목록 화면용 전수 조회입니다. 해시 제거는 응답 DTO 변환이
    /// 담당합니다.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
