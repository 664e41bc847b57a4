mod receiver;

pub use receiver::{IncomingFile, ReceivedUpload, UploadReceiver};
