/// Template written by `mend --init`.
pub fn init_template() -> &'static str {
	r##"# Patch file for mend.
#
# Rules are regex search/replace pairs applied to each target, in order.
# Order matters: later patterns may rely on earlier rewrites.
# Whitespace tolerance belongs in each pattern (\s*, \r?\n), not in mend.

# Encoding label used to decode targets, and to encode on save unless
# write-encoding says otherwise. WHATWG labels: "utf-8", "windows-1252", ...
encoding = "utf-8"

# Line terminators in the output are forced to this style: "lf" or "crlf".
newline = "lf"

# Files this patch applies to when none are given on the command line.
# targets = ["src/generated/output.tsx"]

[[rules]]
description = "example: collapse runs of blank lines"
pattern = '\n{3,}'
replacement = "\n\n"
"##
}
