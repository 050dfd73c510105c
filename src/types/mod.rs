mod meta;
pub use self::meta::{PaginatedResponse, Paging};

mod common;
pub use self::common::{PictureSize, Pictures, Privacy, Stats};

mod album;
pub use self::album::{Album, AlbumRequest};

mod category;
pub use self::category::{Category, SubCategory};

mod comment;
pub use self::comment::{Comment, CommentRequest};

mod channel;
pub use self::channel::{Channel, ChannelRequest};

mod group;
pub use self::group::{Group, GroupRequest};

mod tag;
pub use self::tag::Tag;

mod user;
pub use self::user::{User, UserRequest, Website};

mod video;
pub use self::video::{Upload, UploadApproach, UploadVideoRequest, Video, VideoRequest};
