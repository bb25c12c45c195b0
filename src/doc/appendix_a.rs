/*!
# Error Messages

Every error reports the first word that could not be used along with its
position. An empty file reports word 0.

| Message | Meaning |
|---|---|
| Program did not start with {. | The first word is not `{`. |
| Program did not end with }. | Words ran out before the closing `}`. |
| No proper instruction found. | An unknown instruction word. |
| No VARNUM found. | `FD`, `RT` or `LT` is the last word. |
| Null DO instruction. | `DO` is the last word. |
| Expected { in DO instruction. | The loop body does not open with `{`. |
| Expected FROM in DO instruction. | |
| Expected VARNUM in DO instruction. | A bound is missing. |
| Expected TO in DO instruction. | |
| Null SET instruction. | `SET` is the last word. |
| Expected := in SET instruction. | |
| Attempted to use SET with null value. | The expression was empty. |
| Incorrect POLISH notation. | Numbers were left over at `;`. |
| Null POLISH instruction. | Words ran out before `;`. |
| OP is more than one character. | For example `++`. |
| OP operated on a non-existent number. | An operator had fewer than two numbers. |
| POLISH expression is too long. | More than 65535 numbers pending. |
| Expected VARNUM in JUMP instruction. | |
| Expected , in JUMP instruction. | |
| Null COLOUR instruction. | `COLOUR` is the last word. |
| Expected VARNUM in COLOUR instruction. | Fewer than three amounts. |
| VARNUM contains invalid characters. | A misplaced `-` or a second `.`. |
| VAR is too many characters. | A word longer than one letter where a variable belongs. |
| VAR is an unexpected character. | Not an uppercase letter. |
*/
