/// Names the payload variant a stack node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Token,
    Byte,
    Double,
}
