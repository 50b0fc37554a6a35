/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2+3 = 5`
    /// `6/3 = 2`
    FoldConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `-0 = 0`
    NegateZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `(1/a)*b = b/a`
    /// `b*(1/a) = b/a`
    MultiplyReciprocal,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,
}
