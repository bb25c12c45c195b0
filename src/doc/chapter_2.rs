/*!
# Variables and Loops

There are 26 variables, `A` to `Z`. They all start at zero at the beginning
of every run.

## SET V := expression ;
Expressions are written operands first, operators after. Only `+`, `-`,
`*`, and `/` are available.

```text
SET A := 2 3 * 4 + ;
```

leaves `A` at 10. The expression must leave exactly one number behind.
An operator without two numbers to work on, or numbers left over at the `;`,
is an error. The `;` must stand alone; `1;` is read as a bad variable name.

## DO V FROM a TO b { ... }
Sets `V` to `a` and runs the body, then adds one to `V` until `V` has
passed `b`. The body always runs at least once. The bound is read once
before the first pass.

```text
{ DO A FROM 1 TO 36 { FD A RT 10 } }
```

Loops nest and may change their own variable. Nothing stops a loop that
never finishes.
*/
