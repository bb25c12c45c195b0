/*!
# Introductory Tutorial for Turtle

A turtle program is a list of instructions inside a pair of braces. Every
word, brace, and symbol must be separated by whitespace. Put the following
in a file called `square.ttl`.

```text
{
  DO A FROM 1 TO 4 {
    FD 100
    RT 90
  }
}
```

Then draw it in the terminal.

```text
turtle square.ttl
```

The turtle starts in the middle of an 800 by 600 canvas, facing up. Each
`FD` draws a line and the picture builds up one line at a time. Press `q`
or Esc to close the picture.

If something is wrong with the program, nothing is drawn and you get a
message naming the first word that could not be understood. Words are
counted from 1 starting at the opening brace.

```text
Error: No proper instruction found. Issue encountered at word 4: RaT.
```

Two switches change what happens to the program.

`--check` only reads the program and answers `OK` or an error. Arithmetic
in `SET` is not evaluated in this mode so a bad expression is only caught
when drawing.

`--trace` runs the program without a terminal and prints every drawing
command. This is handy for diffing two versions of a program.

```text
turtle --trace square.ttl
LINE (400.00, 300.00) (400.00, 400.00)
PRESENT
...
```

The environment variables `TURTLE_WIDTH`, `TURTLE_HEIGHT`,
`TURTLE_DELAY_MS`, `TURTLE_RANDOM_MAX`, and `TURTLE_SEED` adjust the canvas
size, the pause after each line, the bound on `RANDOM`, and the random seed.
Set `RUST_LOG=debug` to see what the interpreter is doing.
*/
