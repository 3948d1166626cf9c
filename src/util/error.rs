use std::os::raw::c_int;

type ErrorNum = c_int;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("file '{0}' already exists")]
    AlreadyExists(String),
    #[error("file '{0}' does not exist")]
    NotFound(String),
    #[error("not enough free blocks: {needed} needed, {available} available")]
    InsufficientSpace { needed: usize, available: usize },
    #[error("no free inodes left")]
    NoFreeInode,
    #[error("invalid file size {0}, must be a positive number of bytes")]
    InvalidSize(i64),
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl Error {
    pub fn error_num(&self) -> ErrorNum {
        match self {
            Error::AlreadyExists(_) => libc::EEXIST,
            Error::NotFound(_) => libc::ENOENT,
            // ext2 reports an exhausted inode table as ENOSPC too
            Error::InsufficientSpace { .. } | Error::NoFreeInode => libc::ENOSPC,
            Error::InvalidSize(_) | Error::InvalidGeometry(_) => libc::EINVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_numbers() {
        assert_eq!(Error::AlreadyExists("a".into()).error_num(), libc::EEXIST);
        assert_eq!(Error::NotFound("a".into()).error_num(), libc::ENOENT);
        assert_eq!(Error::NoFreeInode.error_num(), libc::ENOSPC);
        assert_eq!(Error::InvalidSize(0).error_num(), libc::EINVAL);
    }

    #[test]
    fn messages() {
        let err = Error::InsufficientSpace { needed: 3, available: 1 };
        assert_eq!(err.to_string(), "not enough free blocks: 3 needed, 1 available");
        assert_eq!(Error::NotFound("x".into()).to_string(), "file 'x' does not exist");
    }
}
