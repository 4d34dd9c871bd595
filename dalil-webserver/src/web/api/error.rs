use std::{io, string};

use anyhow::anyhow;
use dalil_application::error::{AppError, BError};
pub use dalil_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
    tokio::task::JoinError,
};
use thiserror::Error;

use super::json_error_response;

const MSG_AR_INTERNAL: &str = "حدث خطأ غير متوقع، يرجى المحاولة لاحقاً";
const MSG_AR_INVALID_REQUEST: &str = "الطلب غير صالح";
const MSG_AR_NOT_FOUND: &str = "العنصر المطلوب غير موجود";
const MSG_AR_TOO_LARGE: &str = "حجم الملف أكبر من المسموح";

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn payload_too_large(limit: u64) -> Self {
        Self::OtherWithStatus(
            anyhow!("The file exceeds the limit of {limit} bytes"),
            Status::PayloadTooLarge,
        )
    }
}

/// The user-facing Arabic text of a business error.
fn message_ar(err: &ParameterError) -> &'static str {
    use ParameterError as E;
    match err {
        E::Name => "الاسم غير صالح",
        E::Category => "التصنيف غير صالح",
        E::InvalidPosition => "الموقع الجغرافي غير صالح",
        E::Email => "البريد الإلكتروني غير صالح",
        E::Phone => "رقم الهاتف غير صالح",
        E::Url => "الرابط غير صالح",
        E::Password => "كلمة المرور قصيرة جداً",
        E::UserExists => "يوجد حساب بهذا البريد الإلكتروني مسبقاً",
        E::UserDoesNotExist => "المستخدم غير موجود",
        E::Credentials => "البريد الإلكتروني أو كلمة المرور غير صحيحة",
        E::Forbidden => "ليس لديك صلاحية للقيام بهذا الإجراء",
        E::Unauthorized => "يرجى تسجيل الدخول أولاً",
        E::RevokeOwnAdmin => "لا يمكنك إزالة صلاحية الإدارة عن حسابك",
        E::NoActiveSubscription => "لا يوجد لديك اشتراك فعال",
        E::MaxPlacesReached => "لقد وصلت إلى الحد الأقصى لعدد المحلات في باقتك",
        E::MaxProductsReached => "لقد وصلت إلى الحد الأقصى لعدد المنتجات في باقتك",
        E::MaxImagesReached => "لقد وصلت إلى الحد الأقصى لعدد الصور في باقتك",
        E::MaxVideosReached => "لقد وصلت إلى الحد الأقصى لعدد الفيديوهات في باقتك",
        E::EmptyMessage => "لا يمكن إرسال رسالة فارغة",
        E::MessageTooLong => "الرسالة طويلة جداً",
        E::MessageToSelf => "لا يمكنك مراسلة نفسك",
        E::InvalidReply => "لا يمكن الرد على رسالة من محل آخر",
        E::InvalidCode => "الرمز غير صالح",
        E::CodeExists => "هذا الرمز مستخدم مسبقاً",
        E::InvalidPromoCode => "رمز الخصم غير صالح أو منتهي الصلاحية",
        E::Percent => "يجب أن تكون النسبة بين 0 و 100",
        E::Price => "السعر غير صالح",
        E::InvalidDuration => "مدة الباقة غير صالحة",
        E::PackageInactive => "هذه الباقة غير متاحة حالياً",
        E::OwnerCannotBeEmployee => "لا يمكن لصاحب المحل أن يكون موظفاً فيه",
        E::AlreadyEmployee => "أنت موظف في هذا المحل مسبقاً",
        E::RequestPending => "لديك طلب توظيف قيد المراجعة",
        E::RequestAlreadyDecided => "تمت معالجة هذا الطلب مسبقاً",
        E::VideoHostingNotConnected => "خدمة رفع الفيديو غير مفعلة",
        E::InvalidLimit => "عدد النتائج المطلوب غير صالح",
        E::Gateway(_) => "تعذر الاتصال بخدمة خارجية، يرجى المحاولة لاحقاً",
        E::Repo(RepoError::NotFound) => MSG_AR_NOT_FOUND,
        E::Repo(_) => MSG_AR_INTERNAL,
    }
}

fn status_of(err: &ParameterError) -> Status {
    use ParameterError as E;
    match err {
        E::Credentials | E::Unauthorized => Status::Unauthorized,
        E::Forbidden => Status::Forbidden,
        E::UserDoesNotExist | E::Repo(RepoError::NotFound) => Status::NotFound,
        E::Gateway(_) => Status::BadGateway,
        E::Repo(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<string::FromUtf8Error> for Error {
    fn from(err: string::FromUtf8Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl<T: io::Write> From<csv::IntoInnerError<csv::Writer<T>>> for Error {
    fn from(err: csv::IntoInnerError<csv::Writer<T>>) -> Self {
        Self::Other(anyhow!("{err}"))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        Self::Other(anyhow!("Background task failed: {err}"))
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<dalil_entities::email::EmailAddressParseError> for Error {
    fn from(err: dalil_entities::email::EmailAddressParseError) -> Self {
        Self::from(ParameterError::from(err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(AppError::Business(BError::Parameter(err))) => {
                let status = status_of(&err);
                if status == Status::InternalServerError {
                    error!("Error: {err}");
                } else if status == Status::BadGateway {
                    warn!("{err}");
                }
                json_error_response(req, &err, message_ar(&err), status)
            }
            Error::App(AppError::Business(BError::Repo(RepoError::NotFound))) => {
                json_error_response(req, &RepoError::NotFound, MSG_AR_NOT_FOUND, Status::NotFound)
            }
            Error::App(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, MSG_AR_INTERNAL, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => {
                let message_ar = if status == Status::PayloadTooLarge {
                    MSG_AR_TOO_LARGE
                } else {
                    MSG_AR_INVALID_REQUEST
                };
                json_error_response(req, &err, message_ar, status)
            }
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, MSG_AR_INTERNAL, Status::InternalServerError)
            }
        }
    }
}
