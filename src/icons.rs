use anyhow::anyhow;
use gpui::*;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// An asset source that loads assets from the `./assets` folder.
#[derive(RustEmbed)]
#[folder = "./assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

use gpui_component::IconNamed;

pub enum IconName {
    Bot,
    ChevronLeft,
    ChevronRight,
    File,
    FileUp,
    FolderOpen,
    Home,
    LoaderCircle,
    MessageSquare,
    Minus,
    PencilLine,
    Plus,
    Send,
    Trash,
    User,
    WindowClose,
    WindowMaximize,
    WindowMinimize,
    WindowRestore,
    X,
}

impl IconNamed for IconName {
    fn path(self) -> gpui::SharedString {
        match self {
            Self::Bot => "icons/bot.svg",
            Self::ChevronLeft => "icons/chevron-left.svg",
            Self::ChevronRight => "icons/chevron-right.svg",
            Self::File => "icons/file.svg",
            Self::FileUp => "icons/file-up.svg",
            Self::FolderOpen => "icons/folder-open.svg",
            Self::Home => "icons/home.svg",
            Self::LoaderCircle => "icons/loader-circle.svg",
            Self::MessageSquare => "icons/message-square.svg",
            Self::Minus => "icons/minus.svg",
            Self::PencilLine => "icons/pencil-line.svg",
            Self::Plus => "icons/plus.svg",
            Self::Send => "icons/send.svg",
            Self::Trash => "icons/trash.svg",
            Self::User => "icons/user.svg",
            Self::WindowClose => "icons/window-close.svg",
            Self::WindowMaximize => "icons/window-maximize.svg",
            Self::WindowMinimize => "icons/window-minimize.svg",
            Self::WindowRestore => "icons/window-restore.svg",
            Self::X => "icons/x.svg",
        }
        .into()
    }
}
