use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::plugin::{Command, CREATE_GIST};

/// Build the menu bar; every plugin command gets an entry under "Gist".
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, commands: &'static [Command]) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Gist
    for command in commands {
        let shortcut = if command.id == CREATE_GIST {
            Shortcut::Ctrl | Shortcut::Shift | 'g'
        } else {
            Shortcut::None
        };
        let id = command.id;
        menu.add(
            &format!("Gist/{}", command.name),
            shortcut,
            MenuFlag::Normal,
            { let s = *s; move |_| s.send(Message::RunCommand(id)) },
        );
    }
    menu.add("Gist/Settings...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenSettings) });
}
