//! Script commands understood by the harness

use strum_macros::{Display, EnumIter, EnumString};

/// One script command, named by its first word on a script line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Command {
    #[strum(serialize = "new")]
    New,
    #[strum(serialize = "free")]
    Free,
    #[strum(serialize = "ih")]
    InsertHead,
    #[strum(serialize = "it")]
    InsertTail,
    #[strum(serialize = "rh")]
    RemoveHead,
    #[strum(serialize = "rt")]
    RemoveTail,
    #[strum(serialize = "size")]
    Size,
    #[strum(serialize = "dm")]
    DeleteMiddle,
    #[strum(serialize = "dedup")]
    Dedup,
    #[strum(serialize = "swap")]
    Swap,
    #[strum(serialize = "reverse")]
    Reverse,
    #[strum(serialize = "reverseK")]
    ReverseK,
    #[strum(serialize = "sort")]
    Sort,
    #[strum(serialize = "ascend")]
    Ascend,
    #[strum(serialize = "descend")]
    Descend,
    #[strum(serialize = "merge")]
    Merge,
    #[strum(serialize = "show")]
    Show,
    #[strum(serialize = "prev")]
    Prev,
    #[strum(serialize = "next")]
    Next,
    #[strum(serialize = "help")]
    Help,
    #[strum(serialize = "quit")]
    Quit,
}

impl Command {
    /// Usage line shown by `help`
    pub fn usage(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Free => "free",
            Self::InsertHead => "ih str [n]",
            Self::InsertTail => "it str [n]",
            Self::RemoveHead => "rh [str]",
            Self::RemoveTail => "rt [str]",
            Self::Size => "size",
            Self::DeleteMiddle => "dm",
            Self::Dedup => "dedup",
            Self::Swap => "swap",
            Self::Reverse => "reverse",
            Self::ReverseK => "reverseK k",
            Self::Sort => "sort",
            Self::Ascend => "ascend",
            Self::Descend => "descend",
            Self::Merge => "merge",
            Self::Show => "show",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::New => "Create a new queue and make it current",
            Self::Free => "Delete the current queue",
            Self::InsertHead => "Insert str at the head n times (default 1)",
            Self::InsertTail => "Insert str at the tail n times (default 1)",
            Self::RemoveHead => "Remove from the head, optionally checking the value",
            Self::RemoveTail => "Remove from the tail, optionally checking the value",
            Self::Size => "Print the number of elements",
            Self::DeleteMiddle => "Delete the middle element",
            Self::Dedup => "Delete every element of each run of equal values",
            Self::Swap => "Swap every two adjacent elements",
            Self::Reverse => "Reverse the queue",
            Self::ReverseK => "Reverse the queue in groups of k",
            Self::Sort => "Sort the queue",
            Self::Ascend => "Keep a non-decreasing sequence",
            Self::Descend => "Keep a non-increasing sequence",
            Self::Merge => "Merge every queue into the first one",
            Self::Show => "Print the current queue",
            Self::Prev => "Make the previous queue current",
            Self::Next => "Make the next queue current",
            Self::Help => "List commands",
            Self::Quit => "Stop reading the script",
        }
    }
}
