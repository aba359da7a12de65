mod card_modal;
mod card_tile;
mod delete_modal;
mod page;

pub use page::WalletConsole;
