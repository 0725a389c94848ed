mod home;

pub(crate) use home::*;
