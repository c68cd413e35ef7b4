pub(crate) mod body;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod tabs;
