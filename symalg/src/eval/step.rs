/// Possible rewrite steps taken while evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A bound variable was replaced with its value from the environment.
    Substitute,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0/a = 0`
    DivideZeroLeft,

    /// `a/1 = a`
    DivideOne,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^1 = a`
    PowerOne,

    /// A binary operator applied to two constants was replaced by its value, such as `2+3 = 5`.
    FoldConstant,

    /// `sin(c)` of a constant `c` was replaced by its value.
    Sin,

    /// `cos(c)` of a constant `c` was replaced by its value.
    Cos,
}
