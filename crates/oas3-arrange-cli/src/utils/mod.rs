pub mod document;

pub(crate) use document::DocumentLoader;

#[cfg(test)]
mod tests;
