/*!
# Moving and Colouring

## FD, RT, LT
`FD n` moves forward `n` units, drawing as it goes. `RT n` and `LT n`
turn right and left by `n` degrees. Negative distances move backwards.

```text
{ FD 50 RT 120 FD 50 RT 120 FD 50 }
```

The amount may be a number, a variable from `A` to `Z`, or `RANDOM`. A
random distance or angle is a whole number from 0 to 500.

## JUMP x , y
Moves without drawing. Coordinates are offsets from the middle of the
canvas, so `JUMP 0 , 0` goes back to the start. `RANDOM` picks any point
on the canvas for that axis. The comma is its own word.

```text
{ JUMP -200 , 100 FD 30 JUMP RANDOM , RANDOM FD 30 }
```

## COLOUR
`COLOUR RED`, `COLOUR GREEN`, and `COLOUR BLUE` select a named colour.
`COLOUR r g b` takes three amounts from 0 to 255; fractions are dropped and
anything outside the range is pulled back in. Any of the three may be
`RANDOM`. `COLOUR RANDCOL` picks a bright colour with one channel dark.

The terminal can only show eight colours, so each colour is shown as the
closest of those.
*/
