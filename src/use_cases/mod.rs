pub mod decode;
pub mod encode;
pub mod respond_error;

#[cfg(test)]
pub(crate) mod test_support;
