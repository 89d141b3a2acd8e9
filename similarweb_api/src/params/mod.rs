mod request;
pub use self::request::{AppStore, RequestParams};

mod template;
pub use self::template::{render, ParamMap};
