pub(crate) mod import;
pub(crate) mod store_view;

pub(crate) use import::ImportUseCase;
pub(crate) use store_view::StoreViewUseCase;
