// Letter shown once every tile is revealed. Edit the text below to change it.

pub const LETTER_HEADING: &str = "For You";

pub const LETTER_CONTENT: &str = "\
Every square in this heart is a small piece of us.

Some of them are loud, some of them are quiet, a few of them are blurry because \
we were laughing too hard to hold the camera still. I picked each one because I \
remember exactly how that day felt.

Thank you for all the ordinary days that turned out not to be ordinary at all.

Here's to the squares we haven't filled yet.";
