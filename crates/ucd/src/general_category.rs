// Generated from the Unicode Character Database 15.1.0 (UnicodeData.txt).
// Do not edit by hand, regenerate from the source data instead.

// Values: Cc = 0, Cf = 1, Cn = 2, Co = 3, Cs = 4, Ll = 5, Lm = 6, Lo = 7, Lt = 8, Lu = 9, Mc = 10, Me = 11, Mn = 12, Nd = 13, Nl = 14, No = 15, Pc = 16, Pd = 17, Pe = 18, Pf = 19, Pi = 20, Po = 21, Ps = 22, Sc = 23, Sk = 24, Sm = 25, So = 26, Zl = 27, Zp = 28, Zs = 29

pub const GENERAL_CATEGORY: &[(u32, u32, u8)] = &[
    (0x0000, 0x001F, 0),
    (0x0020, 0x0020, 29),
    (0x0021, 0x0023, 21),
    (0x0024, 0x0024, 23),
    (0x0025, 0x0027, 21),
    (0x0028, 0x0028, 22),
    (0x0029, 0x0029, 18),
    (0x002A, 0x002A, 21),
    (0x002B, 0x002B, 25),
    (0x002C, 0x002C, 21),
    (0x002D, 0x002D, 17),
    (0x002E, 0x002F, 21),
    (0x0030, 0x0039, 13),
    (0x003A, 0x003B, 21),
    (0x003C, 0x003E, 25),
    (0x003F, 0x0040, 21),
    (0x0041, 0x005A, 9),
    (0x005B, 0x005B, 22),
    (0x005C, 0x005C, 21),
    (0x005D, 0x005D, 18),
    (0x005E, 0x005E, 24),
    (0x005F, 0x005F, 16),
    (0x0060, 0x0060, 24),
    (0x0061, 0x007A, 5),
    (0x007B, 0x007B, 22),
    (0x007C, 0x007C, 25),
    (0x007D, 0x007D, 18),
    (0x007E, 0x007E, 25),
    (0x007F, 0x009F, 0),
    (0x00A0, 0x00A0, 29),
    (0x00A1, 0x00A1, 21),
    (0x00A2, 0x00A5, 23),
    (0x00A6, 0x00A6, 26),
    (0x00A7, 0x00A7, 21),
    (0x00A8, 0x00A8, 24),
    (0x00A9, 0x00A9, 26),
    (0x00AA, 0x00AA, 7),
    (0x00AB, 0x00AB, 20),
    (0x00AC, 0x00AC, 25),
    (0x00AD, 0x00AD, 1),
    (0x00AE, 0x00AE, 26),
    (0x00AF, 0x00AF, 24),
    (0x00B0, 0x00B0, 26),
    (0x00B1, 0x00B1, 25),
    (0x00B2, 0x00B3, 15),
    (0x00B4, 0x00B4, 24),
    (0x00B5, 0x00B5, 5),
    (0x00B6, 0x00B7, 21),
    (0x00B8, 0x00B8, 24),
    (0x00B9, 0x00B9, 15),
    (0x00BA, 0x00BA, 7),
    (0x00BB, 0x00BB, 19),
    (0x00BC, 0x00BE, 15),
    (0x00BF, 0x00BF, 21),
    (0x00C0, 0x00D6, 9),
    (0x00D7, 0x00D7, 25),
    (0x00D8, 0x00DE, 9),
    (0x00DF, 0x00F6, 5),
    (0x00F7, 0x00F7, 25),
    (0x00F8, 0x00FF, 5),
    (0x0100, 0x0100, 9),
    (0x0101, 0x0101, 5),
    (0x0102, 0x0102, 9),
    (0x0103, 0x0103, 5),
    (0x0104, 0x0104, 9),
    (0x0105, 0x0105, 5),
    (0x0106, 0x0106, 9),
    (0x0107, 0x0107, 5),
    (0x0108, 0x0108, 9),
    (0x0109, 0x0109, 5),
    (0x010A, 0x010A, 9),
    (0x010B, 0x010B, 5),
    (0x010C, 0x010C, 9),
    (0x010D, 0x010D, 5),
    (0x010E, 0x010E, 9),
    (0x010F, 0x010F, 5),
    (0x0110, 0x0110, 9),
    (0x0111, 0x0111, 5),
    (0x0112, 0x0112, 9),
    (0x0113, 0x0113, 5),
    (0x0114, 0x0114, 9),
    (0x0115, 0x0115, 5),
    (0x0116, 0x0116, 9),
    (0x0117, 0x0117, 5),
    (0x0118, 0x0118, 9),
    (0x0119, 0x0119, 5),
    (0x011A, 0x011A, 9),
    (0x011B, 0x011B, 5),
    (0x011C, 0x011C, 9),
    (0x011D, 0x011D, 5),
    (0x011E, 0x011E, 9),
    (0x011F, 0x011F, 5),
    (0x0120, 0x0120, 9),
    (0x0121, 0x0121, 5),
    (0x0122, 0x0122, 9),
    (0x0123, 0x0123, 5),
    (0x0124, 0x0124, 9),
    (0x0125, 0x0125, 5),
    (0x0126, 0x0126, 9),
    (0x0127, 0x0127, 5),
    (0x0128, 0x0128, 9),
    (0x0129, 0x0129, 5),
    (0x012A, 0x012A, 9),
    (0x012B, 0x012B, 5),
    (0x012C, 0x012C, 9),
    (0x012D, 0x012D, 5),
    (0x012E, 0x012E, 9),
    (0x012F, 0x012F, 5),
    (0x0130, 0x0130, 9),
    (0x0131, 0x0131, 5),
    (0x0132, 0x0132, 9),
    (0x0133, 0x0133, 5),
    (0x0134, 0x0134, 9),
    (0x0135, 0x0135, 5),
    (0x0136, 0x0136, 9),
    (0x0137, 0x0138, 5),
    (0x0139, 0x0139, 9),
    (0x013A, 0x013A, 5),
    (0x013B, 0x013B, 9),
    (0x013C, 0x013C, 5),
    (0x013D, 0x013D, 9),
    (0x013E, 0x013E, 5),
    (0x013F, 0x013F, 9),
    (0x0140, 0x0140, 5),
    (0x0141, 0x0141, 9),
    (0x0142, 0x0142, 5),
    (0x0143, 0x0143, 9),
    (0x0144, 0x0144, 5),
    (0x0145, 0x0145, 9),
    (0x0146, 0x0146, 5),
    (0x0147, 0x0147, 9),
    (0x0148, 0x0149, 5),
    (0x014A, 0x014A, 9),
    (0x014B, 0x014B, 5),
    (0x014C, 0x014C, 9),
    (0x014D, 0x014D, 5),
    (0x014E, 0x014E, 9),
    (0x014F, 0x014F, 5),
    (0x0150, 0x0150, 9),
    (0x0151, 0x0151, 5),
    (0x0152, 0x0152, 9),
    (0x0153, 0x0153, 5),
    (0x0154, 0x0154, 9),
    (0x0155, 0x0155, 5),
    (0x0156, 0x0156, 9),
    (0x0157, 0x0157, 5),
    (0x0158, 0x0158, 9),
    (0x0159, 0x0159, 5),
    (0x015A, 0x015A, 9),
    (0x015B, 0x015B, 5),
    (0x015C, 0x015C, 9),
    (0x015D, 0x015D, 5),
    (0x015E, 0x015E, 9),
    (0x015F, 0x015F, 5),
    (0x0160, 0x0160, 9),
    (0x0161, 0x0161, 5),
    (0x0162, 0x0162, 9),
    (0x0163, 0x0163, 5),
    (0x0164, 0x0164, 9),
    (0x0165, 0x0165, 5),
    (0x0166, 0x0166, 9),
    (0x0167, 0x0167, 5),
    (0x0168, 0x0168, 9),
    (0x0169, 0x0169, 5),
    (0x016A, 0x016A, 9),
    (0x016B, 0x016B, 5),
    (0x016C, 0x016C, 9),
    (0x016D, 0x016D, 5),
    (0x016E, 0x016E, 9),
    (0x016F, 0x016F, 5),
    (0x0170, 0x0170, 9),
    (0x0171, 0x0171, 5),
    (0x0172, 0x0172, 9),
    (0x0173, 0x0173, 5),
    (0x0174, 0x0174, 9),
    (0x0175, 0x0175, 5),
    (0x0176, 0x0176, 9),
    (0x0177, 0x0177, 5),
    (0x0178, 0x0179, 9),
    (0x017A, 0x017A, 5),
    (0x017B, 0x017B, 9),
    (0x017C, 0x017C, 5),
    (0x017D, 0x017D, 9),
    (0x017E, 0x0180, 5),
    (0x0181, 0x0182, 9),
    (0x0183, 0x0183, 5),
    (0x0184, 0x0184, 9),
    (0x0185, 0x0185, 5),
    (0x0186, 0x0187, 9),
    (0x0188, 0x0188, 5),
    (0x0189, 0x018B, 9),
    (0x018C, 0x018D, 5),
    (0x018E, 0x0191, 9),
    (0x0192, 0x0192, 5),
    (0x0193, 0x0194, 9),
    (0x0195, 0x0195, 5),
    (0x0196, 0x0198, 9),
    (0x0199, 0x019B, 5),
    (0x019C, 0x019D, 9),
    (0x019E, 0x019E, 5),
    (0x019F, 0x01A0, 9),
    (0x01A1, 0x01A1, 5),
    (0x01A2, 0x01A2, 9),
    (0x01A3, 0x01A3, 5),
    (0x01A4, 0x01A4, 9),
    (0x01A5, 0x01A5, 5),
    (0x01A6, 0x01A7, 9),
    (0x01A8, 0x01A8, 5),
    (0x01A9, 0x01A9, 9),
    (0x01AA, 0x01AB, 5),
    (0x01AC, 0x01AC, 9),
    (0x01AD, 0x01AD, 5),
    (0x01AE, 0x01AF, 9),
    (0x01B0, 0x01B0, 5),
    (0x01B1, 0x01B3, 9),
    (0x01B4, 0x01B4, 5),
    (0x01B5, 0x01B5, 9),
    (0x01B6, 0x01B6, 5),
    (0x01B7, 0x01B8, 9),
    (0x01B9, 0x01BA, 5),
    (0x01BB, 0x01BB, 7),
    (0x01BC, 0x01BC, 9),
    (0x01BD, 0x01BF, 5),
    (0x01C0, 0x01C3, 7),
    (0x01C4, 0x01C4, 9),
    (0x01C5, 0x01C5, 8),
    (0x01C6, 0x01C6, 5),
    (0x01C7, 0x01C7, 9),
    (0x01C8, 0x01C8, 8),
    (0x01C9, 0x01C9, 5),
    (0x01CA, 0x01CA, 9),
    (0x01CB, 0x01CB, 8),
    (0x01CC, 0x01CC, 5),
    (0x01CD, 0x01CD, 9),
    (0x01CE, 0x01CE, 5),
    (0x01CF, 0x01CF, 9),
    (0x01D0, 0x01D0, 5),
    (0x01D1, 0x01D1, 9),
    (0x01D2, 0x01D2, 5),
    (0x01D3, 0x01D3, 9),
    (0x01D4, 0x01D4, 5),
    (0x01D5, 0x01D5, 9),
    (0x01D6, 0x01D6, 5),
    (0x01D7, 0x01D7, 9),
    (0x01D8, 0x01D8, 5),
    (0x01D9, 0x01D9, 9),
    (0x01DA, 0x01DA, 5),
    (0x01DB, 0x01DB, 9),
    (0x01DC, 0x01DD, 5),
    (0x01DE, 0x01DE, 9),
    (0x01DF, 0x01DF, 5),
    (0x01E0, 0x01E0, 9),
    (0x01E1, 0x01E1, 5),
    (0x01E2, 0x01E2, 9),
    (0x01E3, 0x01E3, 5),
    (0x01E4, 0x01E4, 9),
    (0x01E5, 0x01E5, 5),
    (0x01E6, 0x01E6, 9),
    (0x01E7, 0x01E7, 5),
    (0x01E8, 0x01E8, 9),
    (0x01E9, 0x01E9, 5),
    (0x01EA, 0x01EA, 9),
    (0x01EB, 0x01EB, 5),
    (0x01EC, 0x01EC, 9),
    (0x01ED, 0x01ED, 5),
    (0x01EE, 0x01EE, 9),
    (0x01EF, 0x01F0, 5),
    (0x01F1, 0x01F1, 9),
    (0x01F2, 0x01F2, 8),
    (0x01F3, 0x01F3, 5),
    (0x01F4, 0x01F4, 9),
    (0x01F5, 0x01F5, 5),
    (0x01F6, 0x01F8, 9),
    (0x01F9, 0x01F9, 5),
    (0x01FA, 0x01FA, 9),
    (0x01FB, 0x01FB, 5),
    (0x01FC, 0x01FC, 9),
    (0x01FD, 0x01FD, 5),
    (0x01FE, 0x01FE, 9),
    (0x01FF, 0x01FF, 5),
    (0x0200, 0x0200, 9),
    (0x0201, 0x0201, 5),
    (0x0202, 0x0202, 9),
    (0x0203, 0x0203, 5),
    (0x0204, 0x0204, 9),
    (0x0205, 0x0205, 5),
    (0x0206, 0x0206, 9),
    (0x0207, 0x0207, 5),
    (0x0208, 0x0208, 9),
    (0x0209, 0x0209, 5),
    (0x020A, 0x020A, 9),
    (0x020B, 0x020B, 5),
    (0x020C, 0x020C, 9),
    (0x020D, 0x020D, 5),
    (0x020E, 0x020E, 9),
    (0x020F, 0x020F, 5),
    (0x0210, 0x0210, 9),
    (0x0211, 0x0211, 5),
    (0x0212, 0x0212, 9),
    (0x0213, 0x0213, 5),
    (0x0214, 0x0214, 9),
    (0x0215, 0x0215, 5),
    (0x0216, 0x0216, 9),
    (0x0217, 0x0217, 5),
    (0x0218, 0x0218, 9),
    (0x0219, 0x0219, 5),
    (0x021A, 0x021A, 9),
    (0x021B, 0x021B, 5),
    (0x021C, 0x021C, 9),
    (0x021D, 0x021D, 5),
    (0x021E, 0x021E, 9),
    (0x021F, 0x021F, 5),
    (0x0220, 0x0220, 9),
    (0x0221, 0x0221, 5),
    (0x0222, 0x0222, 9),
    (0x0223, 0x0223, 5),
    (0x0224, 0x0224, 9),
    (0x0225, 0x0225, 5),
    (0x0226, 0x0226, 9),
    (0x0227, 0x0227, 5),
    (0x0228, 0x0228, 9),
    (0x0229, 0x0229, 5),
    (0x022A, 0x022A, 9),
    (0x022B, 0x022B, 5),
    (0x022C, 0x022C, 9),
    (0x022D, 0x022D, 5),
    (0x022E, 0x022E, 9),
    (0x022F, 0x022F, 5),
    (0x0230, 0x0230, 9),
    (0x0231, 0x0231, 5),
    (0x0232, 0x0232, 9),
    (0x0233, 0x0239, 5),
    (0x023A, 0x023B, 9),
    (0x023C, 0x023C, 5),
    (0x023D, 0x023E, 9),
    (0x023F, 0x0240, 5),
    (0x0241, 0x0241, 9),
    (0x0242, 0x0242, 5),
    (0x0243, 0x0246, 9),
    (0x0247, 0x0247, 5),
    (0x0248, 0x0248, 9),
    (0x0249, 0x0249, 5),
    (0x024A, 0x024A, 9),
    (0x024B, 0x024B, 5),
    (0x024C, 0x024C, 9),
    (0x024D, 0x024D, 5),
    (0x024E, 0x024E, 9),
    (0x024F, 0x0293, 5),
    (0x0294, 0x0294, 7),
    (0x0295, 0x02AF, 5),
    (0x02B0, 0x02C1, 6),
    (0x02C2, 0x02C5, 24),
    (0x02C6, 0x02D1, 6),
    (0x02D2, 0x02DF, 24),
    (0x02E0, 0x02E4, 6),
    (0x02E5, 0x02EB, 24),
    (0x02EC, 0x02EC, 6),
    (0x02ED, 0x02ED, 24),
    (0x02EE, 0x02EE, 6),
    (0x02EF, 0x02FF, 24),
    (0x0300, 0x036F, 12),
    (0x0370, 0x0370, 9),
    (0x0371, 0x0371, 5),
    (0x0372, 0x0372, 9),
    (0x0373, 0x0373, 5),
    (0x0374, 0x0374, 6),
    (0x0375, 0x0375, 24),
    (0x0376, 0x0376, 9),
    (0x0377, 0x0377, 5),
    (0x037A, 0x037A, 6),
    (0x037B, 0x037D, 5),
    (0x037E, 0x037E, 21),
    (0x037F, 0x037F, 9),
    (0x0384, 0x0385, 24),
    (0x0386, 0x0386, 9),
    (0x0387, 0x0387, 21),
    (0x0388, 0x038A, 9),
    (0x038C, 0x038C, 9),
    (0x038E, 0x038F, 9),
    (0x0390, 0x0390, 5),
    (0x0391, 0x03A1, 9),
    (0x03A3, 0x03AB, 9),
    (0x03AC, 0x03CE, 5),
    (0x03CF, 0x03CF, 9),
    (0x03D0, 0x03D1, 5),
    (0x03D2, 0x03D4, 9),
    (0x03D5, 0x03D7, 5),
    (0x03D8, 0x03D8, 9),
    (0x03D9, 0x03D9, 5),
    (0x03DA, 0x03DA, 9),
    (0x03DB, 0x03DB, 5),
    (0x03DC, 0x03DC, 9),
    (0x03DD, 0x03DD, 5),
    (0x03DE, 0x03DE, 9),
    (0x03DF, 0x03DF, 5),
    (0x03E0, 0x03E0, 9),
    (0x03E1, 0x03E1, 5),
    (0x03E2, 0x03E2, 9),
    (0x03E3, 0x03E3, 5),
    (0x03E4, 0x03E4, 9),
    (0x03E5, 0x03E5, 5),
    (0x03E6, 0x03E6, 9),
    (0x03E7, 0x03E7, 5),
    (0x03E8, 0x03E8, 9),
    (0x03E9, 0x03E9, 5),
    (0x03EA, 0x03EA, 9),
    (0x03EB, 0x03EB, 5),
    (0x03EC, 0x03EC, 9),
    (0x03ED, 0x03ED, 5),
    (0x03EE, 0x03EE, 9),
    (0x03EF, 0x03F3, 5),
    (0x03F4, 0x03F4, 9),
    (0x03F5, 0x03F5, 5),
    (0x03F6, 0x03F6, 25),
    (0x03F7, 0x03F7, 9),
    (0x03F8, 0x03F8, 5),
    (0x03F9, 0x03FA, 9),
    (0x03FB, 0x03FC, 5),
    (0x03FD, 0x042F, 9),
    (0x0430, 0x045F, 5),
    (0x0460, 0x0460, 9),
    (0x0461, 0x0461, 5),
    (0x0462, 0x0462, 9),
    (0x0463, 0x0463, 5),
    (0x0464, 0x0464, 9),
    (0x0465, 0x0465, 5),
    (0x0466, 0x0466, 9),
    (0x0467, 0x0467, 5),
    (0x0468, 0x0468, 9),
    (0x0469, 0x0469, 5),
    (0x046A, 0x046A, 9),
    (0x046B, 0x046B, 5),
    (0x046C, 0x046C, 9),
    (0x046D, 0x046D, 5),
    (0x046E, 0x046E, 9),
    (0x046F, 0x046F, 5),
    (0x0470, 0x0470, 9),
    (0x0471, 0x0471, 5),
    (0x0472, 0x0472, 9),
    (0x0473, 0x0473, 5),
    (0x0474, 0x0474, 9),
    (0x0475, 0x0475, 5),
    (0x0476, 0x0476, 9),
    (0x0477, 0x0477, 5),
    (0x0478, 0x0478, 9),
    (0x0479, 0x0479, 5),
    (0x047A, 0x047A, 9),
    (0x047B, 0x047B, 5),
    (0x047C, 0x047C, 9),
    (0x047D, 0x047D, 5),
    (0x047E, 0x047E, 9),
    (0x047F, 0x047F, 5),
    (0x0480, 0x0480, 9),
    (0x0481, 0x0481, 5),
    (0x0482, 0x0482, 26),
    (0x0483, 0x0487, 12),
    (0x0488, 0x0489, 11),
    (0x048A, 0x048A, 9),
    (0x048B, 0x048B, 5),
    (0x048C, 0x048C, 9),
    (0x048D, 0x048D, 5),
    (0x048E, 0x048E, 9),
    (0x048F, 0x048F, 5),
    (0x0490, 0x0490, 9),
    (0x0491, 0x0491, 5),
    (0x0492, 0x0492, 9),
    (0x0493, 0x0493, 5),
    (0x0494, 0x0494, 9),
    (0x0495, 0x0495, 5),
    (0x0496, 0x0496, 9),
    (0x0497, 0x0497, 5),
    (0x0498, 0x0498, 9),
    (0x0499, 0x0499, 5),
    (0x049A, 0x049A, 9),
    (0x049B, 0x049B, 5),
    (0x049C, 0x049C, 9),
    (0x049D, 0x049D, 5),
    (0x049E, 0x049E, 9),
    (0x049F, 0x049F, 5),
    (0x04A0, 0x04A0, 9),
    (0x04A1, 0x04A1, 5),
    (0x04A2, 0x04A2, 9),
    (0x04A3, 0x04A3, 5),
    (0x04A4, 0x04A4, 9),
    (0x04A5, 0x04A5, 5),
    (0x04A6, 0x04A6, 9),
    (0x04A7, 0x04A7, 5),
    (0x04A8, 0x04A8, 9),
    (0x04A9, 0x04A9, 5),
    (0x04AA, 0x04AA, 9),
    (0x04AB, 0x04AB, 5),
    (0x04AC, 0x04AC, 9),
    (0x04AD, 0x04AD, 5),
    (0x04AE, 0x04AE, 9),
    (0x04AF, 0x04AF, 5),
    (0x04B0, 0x04B0, 9),
    (0x04B1, 0x04B1, 5),
    (0x04B2, 0x04B2, 9),
    (0x04B3, 0x04B3, 5),
    (0x04B4, 0x04B4, 9),
    (0x04B5, 0x04B5, 5),
    (0x04B6, 0x04B6, 9),
    (0x04B7, 0x04B7, 5),
    (0x04B8, 0x04B8, 9),
    (0x04B9, 0x04B9, 5),
    (0x04BA, 0x04BA, 9),
    (0x04BB, 0x04BB, 5),
    (0x04BC, 0x04BC, 9),
    (0x04BD, 0x04BD, 5),
    (0x04BE, 0x04BE, 9),
    (0x04BF, 0x04BF, 5),
    (0x04C0, 0x04C1, 9),
    (0x04C2, 0x04C2, 5),
    (0x04C3, 0x04C3, 9),
    (0x04C4, 0x04C4, 5),
    (0x04C5, 0x04C5, 9),
    (0x04C6, 0x04C6, 5),
    (0x04C7, 0x04C7, 9),
    (0x04C8, 0x04C8, 5),
    (0x04C9, 0x04C9, 9),
    (0x04CA, 0x04CA, 5),
    (0x04CB, 0x04CB, 9),
    (0x04CC, 0x04CC, 5),
    (0x04CD, 0x04CD, 9),
    (0x04CE, 0x04CF, 5),
    (0x04D0, 0x04D0, 9),
    (0x04D1, 0x04D1, 5),
    (0x04D2, 0x04D2, 9),
    (0x04D3, 0x04D3, 5),
    (0x04D4, 0x04D4, 9),
    (0x04D5, 0x04D5, 5),
    (0x04D6, 0x04D6, 9),
    (0x04D7, 0x04D7, 5),
    (0x04D8, 0x04D8, 9),
    (0x04D9, 0x04D9, 5),
    (0x04DA, 0x04DA, 9),
    (0x04DB, 0x04DB, 5),
    (0x04DC, 0x04DC, 9),
    (0x04DD, 0x04DD, 5),
    (0x04DE, 0x04DE, 9),
    (0x04DF, 0x04DF, 5),
    (0x04E0, 0x04E0, 9),
    (0x04E1, 0x04E1, 5),
    (0x04E2, 0x04E2, 9),
    (0x04E3, 0x04E3, 5),
    (0x04E4, 0x04E4, 9),
    (0x04E5, 0x04E5, 5),
    (0x04E6, 0x04E6, 9),
    (0x04E7, 0x04E7, 5),
    (0x04E8, 0x04E8, 9),
    (0x04E9, 0x04E9, 5),
    (0x04EA, 0x04EA, 9),
    (0x04EB, 0x04EB, 5),
    (0x04EC, 0x04EC, 9),
    (0x04ED, 0x04ED, 5),
    (0x04EE, 0x04EE, 9),
    (0x04EF, 0x04EF, 5),
    (0x04F0, 0x04F0, 9),
    (0x04F1, 0x04F1, 5),
    (0x04F2, 0x04F2, 9),
    (0x04F3, 0x04F3, 5),
    (0x04F4, 0x04F4, 9),
    (0x04F5, 0x04F5, 5),
    (0x04F6, 0x04F6, 9),
    (0x04F7, 0x04F7, 5),
    (0x04F8, 0x04F8, 9),
    (0x04F9, 0x04F9, 5),
    (0x04FA, 0x04FA, 9),
    (0x04FB, 0x04FB, 5),
    (0x04FC, 0x04FC, 9),
    (0x04FD, 0x04FD, 5),
    (0x04FE, 0x04FE, 9),
    (0x04FF, 0x04FF, 5),
    (0x0500, 0x0500, 9),
    (0x0501, 0x0501, 5),
    (0x0502, 0x0502, 9),
    (0x0503, 0x0503, 5),
    (0x0504, 0x0504, 9),
    (0x0505, 0x0505, 5),
    (0x0506, 0x0506, 9),
    (0x0507, 0x0507, 5),
    (0x0508, 0x0508, 9),
    (0x0509, 0x0509, 5),
    (0x050A, 0x050A, 9),
    (0x050B, 0x050B, 5),
    (0x050C, 0x050C, 9),
    (0x050D, 0x050D, 5),
    (0x050E, 0x050E, 9),
    (0x050F, 0x050F, 5),
    (0x0510, 0x0510, 9),
    (0x0511, 0x0511, 5),
    (0x0512, 0x0512, 9),
    (0x0513, 0x0513, 5),
    (0x0514, 0x0514, 9),
    (0x0515, 0x0515, 5),
    (0x0516, 0x0516, 9),
    (0x0517, 0x0517, 5),
    (0x0518, 0x0518, 9),
    (0x0519, 0x0519, 5),
    (0x051A, 0x051A, 9),
    (0x051B, 0x051B, 5),
    (0x051C, 0x051C, 9),
    (0x051D, 0x051D, 5),
    (0x051E, 0x051E, 9),
    (0x051F, 0x051F, 5),
    (0x0520, 0x0520, 9),
    (0x0521, 0x0521, 5),
    (0x0522, 0x0522, 9),
    (0x0523, 0x0523, 5),
    (0x0524, 0x0524, 9),
    (0x0525, 0x0525, 5),
    (0x0526, 0x0526, 9),
    (0x0527, 0x0527, 5),
    (0x0528, 0x0528, 9),
    (0x0529, 0x0529, 5),
    (0x052A, 0x052A, 9),
    (0x052B, 0x052B, 5),
    (0x052C, 0x052C, 9),
    (0x052D, 0x052D, 5),
    (0x052E, 0x052E, 9),
    (0x052F, 0x052F, 5),
    (0x0531, 0x0556, 9),
    (0x0559, 0x0559, 6),
    (0x055A, 0x055F, 21),
    (0x0560, 0x0588, 5),
    (0x0589, 0x0589, 21),
    (0x058A, 0x058A, 17),
    (0x058D, 0x058E, 26),
    (0x058F, 0x058F, 23),
    (0x0591, 0x05BD, 12),
    (0x05BE, 0x05BE, 17),
    (0x05BF, 0x05BF, 12),
    (0x05C0, 0x05C0, 21),
    (0x05C1, 0x05C2, 12),
    (0x05C3, 0x05C3, 21),
    (0x05C4, 0x05C5, 12),
    (0x05C6, 0x05C6, 21),
    (0x05C7, 0x05C7, 12),
    (0x05D0, 0x05EA, 7),
    (0x05EF, 0x05F2, 7),
    (0x05F3, 0x05F4, 21),
    (0x0600, 0x0605, 1),
    (0x0606, 0x0608, 25),
    (0x0609, 0x060A, 21),
    (0x060B, 0x060B, 23),
    (0x060C, 0x060D, 21),
    (0x060E, 0x060F, 26),
    (0x0610, 0x061A, 12),
    (0x061B, 0x061B, 21),
    (0x061C, 0x061C, 1),
    (0x061D, 0x061F, 21),
    (0x0620, 0x063F, 7),
    (0x0640, 0x0640, 6),
    (0x0641, 0x064A, 7),
    (0x064B, 0x065F, 12),
    (0x0660, 0x0669, 13),
    (0x066A, 0x066D, 21),
    (0x066E, 0x066F, 7),
    (0x0670, 0x0670, 12),
    (0x0671, 0x06D3, 7),
    (0x06D4, 0x06D4, 21),
    (0x06D5, 0x06D5, 7),
    (0x06D6, 0x06DC, 12),
    (0x06DD, 0x06DD, 1),
    (0x06DE, 0x06DE, 26),
    (0x06DF, 0x06E4, 12),
    (0x06E5, 0x06E6, 6),
    (0x06E7, 0x06E8, 12),
    (0x06E9, 0x06E9, 26),
    (0x06EA, 0x06ED, 12),
    (0x06EE, 0x06EF, 7),
    (0x06F0, 0x06F9, 13),
    (0x06FA, 0x06FC, 7),
    (0x06FD, 0x06FE, 26),
    (0x06FF, 0x06FF, 7),
    (0x0700, 0x070D, 21),
    (0x070F, 0x070F, 1),
    (0x0710, 0x0710, 7),
    (0x0711, 0x0711, 12),
    (0x0712, 0x072F, 7),
    (0x0730, 0x074A, 12),
    (0x074D, 0x07A5, 7),
    (0x07A6, 0x07B0, 12),
    (0x07B1, 0x07B1, 7),
    (0x07C0, 0x07C9, 13),
    (0x07CA, 0x07EA, 7),
    (0x07EB, 0x07F3, 12),
    (0x07F4, 0x07F5, 6),
    (0x07F6, 0x07F6, 26),
    (0x07F7, 0x07F9, 21),
    (0x07FA, 0x07FA, 6),
    (0x07FD, 0x07FD, 12),
    (0x07FE, 0x07FF, 23),
    (0x0800, 0x0815, 7),
    (0x0816, 0x0819, 12),
    (0x081A, 0x081A, 6),
    (0x081B, 0x0823, 12),
    (0x0824, 0x0824, 6),
    (0x0825, 0x0827, 12),
    (0x0828, 0x0828, 6),
    (0x0829, 0x082D, 12),
    (0x0830, 0x083E, 21),
    (0x0840, 0x0858, 7),
    (0x0859, 0x085B, 12),
    (0x085E, 0x085E, 21),
    (0x0860, 0x086A, 7),
    (0x0870, 0x0887, 7),
    (0x0888, 0x0888, 24),
    (0x0889, 0x088E, 7),
    (0x0890, 0x0891, 1),
    (0x0898, 0x089F, 12),
    (0x08A0, 0x08C8, 7),
    (0x08C9, 0x08C9, 6),
    (0x08CA, 0x08E1, 12),
    (0x08E2, 0x08E2, 1),
    (0x08E3, 0x0902, 12),
    (0x0903, 0x0903, 10),
    (0x0904, 0x0939, 7),
    (0x093A, 0x093A, 12),
    (0x093B, 0x093B, 10),
    (0x093C, 0x093C, 12),
    (0x093D, 0x093D, 7),
    (0x093E, 0x0940, 10),
    (0x0941, 0x0948, 12),
    (0x0949, 0x094C, 10),
    (0x094D, 0x094D, 12),
    (0x094E, 0x094F, 10),
    (0x0950, 0x0950, 7),
    (0x0951, 0x0957, 12),
    (0x0958, 0x0961, 7),
    (0x0962, 0x0963, 12),
    (0x0964, 0x0965, 21),
    (0x0966, 0x096F, 13),
    (0x0970, 0x0970, 21),
    (0x0971, 0x0971, 6),
    (0x0972, 0x0980, 7),
    (0x0981, 0x0981, 12),
    (0x0982, 0x0983, 10),
    (0x0985, 0x098C, 7),
    (0x098F, 0x0990, 7),
    (0x0993, 0x09A8, 7),
    (0x09AA, 0x09B0, 7),
    (0x09B2, 0x09B2, 7),
    (0x09B6, 0x09B9, 7),
    (0x09BC, 0x09BC, 12),
    (0x09BD, 0x09BD, 7),
    (0x09BE, 0x09C0, 10),
    (0x09C1, 0x09C4, 12),
    (0x09C7, 0x09C8, 10),
    (0x09CB, 0x09CC, 10),
    (0x09CD, 0x09CD, 12),
    (0x09CE, 0x09CE, 7),
    (0x09D7, 0x09D7, 10),
    (0x09DC, 0x09DD, 7),
    (0x09DF, 0x09E1, 7),
    (0x09E2, 0x09E3, 12),
    (0x09E6, 0x09EF, 13),
    (0x09F0, 0x09F1, 7),
    (0x09F2, 0x09F3, 23),
    (0x09F4, 0x09F9, 15),
    (0x09FA, 0x09FA, 26),
    (0x09FB, 0x09FB, 23),
    (0x09FC, 0x09FC, 7),
    (0x09FD, 0x09FD, 21),
    (0x09FE, 0x09FE, 12),
    (0x0A01, 0x0A02, 12),
    (0x0A03, 0x0A03, 10),
    (0x0A05, 0x0A0A, 7),
    (0x0A0F, 0x0A10, 7),
    (0x0A13, 0x0A28, 7),
    (0x0A2A, 0x0A30, 7),
    (0x0A32, 0x0A33, 7),
    (0x0A35, 0x0A36, 7),
    (0x0A38, 0x0A39, 7),
    (0x0A3C, 0x0A3C, 12),
    (0x0A3E, 0x0A40, 10),
    (0x0A41, 0x0A42, 12),
    (0x0A47, 0x0A48, 12),
    (0x0A4B, 0x0A4D, 12),
    (0x0A51, 0x0A51, 12),
    (0x0A59, 0x0A5C, 7),
    (0x0A5E, 0x0A5E, 7),
    (0x0A66, 0x0A6F, 13),
    (0x0A70, 0x0A71, 12),
    (0x0A72, 0x0A74, 7),
    (0x0A75, 0x0A75, 12),
    (0x0A76, 0x0A76, 21),
    (0x0A81, 0x0A82, 12),
    (0x0A83, 0x0A83, 10),
    (0x0A85, 0x0A8D, 7),
    (0x0A8F, 0x0A91, 7),
    (0x0A93, 0x0AA8, 7),
    (0x0AAA, 0x0AB0, 7),
    (0x0AB2, 0x0AB3, 7),
    (0x0AB5, 0x0AB9, 7),
    (0x0ABC, 0x0ABC, 12),
    (0x0ABD, 0x0ABD, 7),
    (0x0ABE, 0x0AC0, 10),
    (0x0AC1, 0x0AC5, 12),
    (0x0AC7, 0x0AC8, 12),
    (0x0AC9, 0x0AC9, 10),
    (0x0ACB, 0x0ACC, 10),
    (0x0ACD, 0x0ACD, 12),
    (0x0AD0, 0x0AD0, 7),
    (0x0AE0, 0x0AE1, 7),
    (0x0AE2, 0x0AE3, 12),
    (0x0AE6, 0x0AEF, 13),
    (0x0AF0, 0x0AF0, 21),
    (0x0AF1, 0x0AF1, 23),
    (0x0AF9, 0x0AF9, 7),
    (0x0AFA, 0x0AFF, 12),
    (0x0B01, 0x0B01, 12),
    (0x0B02, 0x0B03, 10),
    (0x0B05, 0x0B0C, 7),
    (0x0B0F, 0x0B10, 7),
    (0x0B13, 0x0B28, 7),
    (0x0B2A, 0x0B30, 7),
    (0x0B32, 0x0B33, 7),
    (0x0B35, 0x0B39, 7),
    (0x0B3C, 0x0B3C, 12),
    (0x0B3D, 0x0B3D, 7),
    (0x0B3E, 0x0B3E, 10),
    (0x0B3F, 0x0B3F, 12),
    (0x0B40, 0x0B40, 10),
    (0x0B41, 0x0B44, 12),
    (0x0B47, 0x0B48, 10),
    (0x0B4B, 0x0B4C, 10),
    (0x0B4D, 0x0B4D, 12),
    (0x0B55, 0x0B56, 12),
    (0x0B57, 0x0B57, 10),
    (0x0B5C, 0x0B5D, 7),
    (0x0B5F, 0x0B61, 7),
    (0x0B62, 0x0B63, 12),
    (0x0B66, 0x0B6F, 13),
    (0x0B70, 0x0B70, 26),
    (0x0B71, 0x0B71, 7),
    (0x0B72, 0x0B77, 15),
    (0x0B82, 0x0B82, 12),
    (0x0B83, 0x0B83, 7),
    (0x0B85, 0x0B8A, 7),
    (0x0B8E, 0x0B90, 7),
    (0x0B92, 0x0B95, 7),
    (0x0B99, 0x0B9A, 7),
    (0x0B9C, 0x0B9C, 7),
    (0x0B9E, 0x0B9F, 7),
    (0x0BA3, 0x0BA4, 7),
    (0x0BA8, 0x0BAA, 7),
    (0x0BAE, 0x0BB9, 7),
    (0x0BBE, 0x0BBF, 10),
    (0x0BC0, 0x0BC0, 12),
    (0x0BC1, 0x0BC2, 10),
    (0x0BC6, 0x0BC8, 10),
    (0x0BCA, 0x0BCC, 10),
    (0x0BCD, 0x0BCD, 12),
    (0x0BD0, 0x0BD0, 7),
    (0x0BD7, 0x0BD7, 10),
    (0x0BE6, 0x0BEF, 13),
    (0x0BF0, 0x0BF2, 15),
    (0x0BF3, 0x0BF8, 26),
    (0x0BF9, 0x0BF9, 23),
    (0x0BFA, 0x0BFA, 26),
    (0x0C00, 0x0C00, 12),
    (0x0C01, 0x0C03, 10),
    (0x0C04, 0x0C04, 12),
    (0x0C05, 0x0C0C, 7),
    (0x0C0E, 0x0C10, 7),
    (0x0C12, 0x0C28, 7),
    (0x0C2A, 0x0C39, 7),
    (0x0C3C, 0x0C3C, 12),
    (0x0C3D, 0x0C3D, 7),
    (0x0C3E, 0x0C40, 12),
    (0x0C41, 0x0C44, 10),
    (0x0C46, 0x0C48, 12),
    (0x0C4A, 0x0C4D, 12),
    (0x0C55, 0x0C56, 12),
    (0x0C58, 0x0C5A, 7),
    (0x0C5D, 0x0C5D, 7),
    (0x0C60, 0x0C61, 7),
    (0x0C62, 0x0C63, 12),
    (0x0C66, 0x0C6F, 13),
    (0x0C77, 0x0C77, 21),
    (0x0C78, 0x0C7E, 15),
    (0x0C7F, 0x0C7F, 26),
    (0x0C80, 0x0C80, 7),
    (0x0C81, 0x0C81, 12),
    (0x0C82, 0x0C83, 10),
    (0x0C84, 0x0C84, 21),
    (0x0C85, 0x0C8C, 7),
    (0x0C8E, 0x0C90, 7),
    (0x0C92, 0x0CA8, 7),
    (0x0CAA, 0x0CB3, 7),
    (0x0CB5, 0x0CB9, 7),
    (0x0CBC, 0x0CBC, 12),
    (0x0CBD, 0x0CBD, 7),
    (0x0CBE, 0x0CBE, 10),
    (0x0CBF, 0x0CBF, 12),
    (0x0CC0, 0x0CC4, 10),
    (0x0CC6, 0x0CC6, 12),
    (0x0CC7, 0x0CC8, 10),
    (0x0CCA, 0x0CCB, 10),
    (0x0CCC, 0x0CCD, 12),
    (0x0CD5, 0x0CD6, 10),
    (0x0CDD, 0x0CDE, 7),
    (0x0CE0, 0x0CE1, 7),
    (0x0CE2, 0x0CE3, 12),
    (0x0CE6, 0x0CEF, 13),
    (0x0CF1, 0x0CF2, 7),
    (0x0CF3, 0x0CF3, 10),
    (0x0D00, 0x0D01, 12),
    (0x0D02, 0x0D03, 10),
    (0x0D04, 0x0D0C, 7),
    (0x0D0E, 0x0D10, 7),
    (0x0D12, 0x0D3A, 7),
    (0x0D3B, 0x0D3C, 12),
    (0x0D3D, 0x0D3D, 7),
    (0x0D3E, 0x0D40, 10),
    (0x0D41, 0x0D44, 12),
    (0x0D46, 0x0D48, 10),
    (0x0D4A, 0x0D4C, 10),
    (0x0D4D, 0x0D4D, 12),
    (0x0D4E, 0x0D4E, 7),
    (0x0D4F, 0x0D4F, 26),
    (0x0D54, 0x0D56, 7),
    (0x0D57, 0x0D57, 10),
    (0x0D58, 0x0D5E, 15),
    (0x0D5F, 0x0D61, 7),
    (0x0D62, 0x0D63, 12),
    (0x0D66, 0x0D6F, 13),
    (0x0D70, 0x0D78, 15),
    (0x0D79, 0x0D79, 26),
    (0x0D7A, 0x0D7F, 7),
    (0x0D81, 0x0D81, 12),
    (0x0D82, 0x0D83, 10),
    (0x0D85, 0x0D96, 7),
    (0x0D9A, 0x0DB1, 7),
    (0x0DB3, 0x0DBB, 7),
    (0x0DBD, 0x0DBD, 7),
    (0x0DC0, 0x0DC6, 7),
    (0x0DCA, 0x0DCA, 12),
    (0x0DCF, 0x0DD1, 10),
    (0x0DD2, 0x0DD4, 12),
    (0x0DD6, 0x0DD6, 12),
    (0x0DD8, 0x0DDF, 10),
    (0x0DE6, 0x0DEF, 13),
    (0x0DF2, 0x0DF3, 10),
    (0x0DF4, 0x0DF4, 21),
    (0x0E01, 0x0E30, 7),
    (0x0E31, 0x0E31, 12),
    (0x0E32, 0x0E33, 7),
    (0x0E34, 0x0E3A, 12),
    (0x0E3F, 0x0E3F, 23),
    (0x0E40, 0x0E45, 7),
    (0x0E46, 0x0E46, 6),
    (0x0E47, 0x0E4E, 12),
    (0x0E4F, 0x0E4F, 21),
    (0x0E50, 0x0E59, 13),
    (0x0E5A, 0x0E5B, 21),
    (0x0E81, 0x0E82, 7),
    (0x0E84, 0x0E84, 7),
    (0x0E86, 0x0E8A, 7),
    (0x0E8C, 0x0EA3, 7),
    (0x0EA5, 0x0EA5, 7),
    (0x0EA7, 0x0EB0, 7),
    (0x0EB1, 0x0EB1, 12),
    (0x0EB2, 0x0EB3, 7),
    (0x0EB4, 0x0EBC, 12),
    (0x0EBD, 0x0EBD, 7),
    (0x0EC0, 0x0EC4, 7),
    (0x0EC6, 0x0EC6, 6),
    (0x0EC8, 0x0ECE, 12),
    (0x0ED0, 0x0ED9, 13),
    (0x0EDC, 0x0EDF, 7),
    (0x0F00, 0x0F00, 7),
    (0x0F01, 0x0F03, 26),
    (0x0F04, 0x0F12, 21),
    (0x0F13, 0x0F13, 26),
    (0x0F14, 0x0F14, 21),
    (0x0F15, 0x0F17, 26),
    (0x0F18, 0x0F19, 12),
    (0x0F1A, 0x0F1F, 26),
    (0x0F20, 0x0F29, 13),
    (0x0F2A, 0x0F33, 15),
    (0x0F34, 0x0F34, 26),
    (0x0F35, 0x0F35, 12),
    (0x0F36, 0x0F36, 26),
    (0x0F37, 0x0F37, 12),
    (0x0F38, 0x0F38, 26),
    (0x0F39, 0x0F39, 12),
    (0x0F3A, 0x0F3A, 22),
    (0x0F3B, 0x0F3B, 18),
    (0x0F3C, 0x0F3C, 22),
    (0x0F3D, 0x0F3D, 18),
    (0x0F3E, 0x0F3F, 10),
    (0x0F40, 0x0F47, 7),
    (0x0F49, 0x0F6C, 7),
    (0x0F71, 0x0F7E, 12),
    (0x0F7F, 0x0F7F, 10),
    (0x0F80, 0x0F84, 12),
    (0x0F85, 0x0F85, 21),
    (0x0F86, 0x0F87, 12),
    (0x0F88, 0x0F8C, 7),
    (0x0F8D, 0x0F97, 12),
    (0x0F99, 0x0FBC, 12),
    (0x0FBE, 0x0FC5, 26),
    (0x0FC6, 0x0FC6, 12),
    (0x0FC7, 0x0FCC, 26),
    (0x0FCE, 0x0FCF, 26),
    (0x0FD0, 0x0FD4, 21),
    (0x0FD5, 0x0FD8, 26),
    (0x0FD9, 0x0FDA, 21),
    (0x1000, 0x102A, 7),
    (0x102B, 0x102C, 10),
    (0x102D, 0x1030, 12),
    (0x1031, 0x1031, 10),
    (0x1032, 0x1037, 12),
    (0x1038, 0x1038, 10),
    (0x1039, 0x103A, 12),
    (0x103B, 0x103C, 10),
    (0x103D, 0x103E, 12),
    (0x103F, 0x103F, 7),
    (0x1040, 0x1049, 13),
    (0x104A, 0x104F, 21),
    (0x1050, 0x1055, 7),
    (0x1056, 0x1057, 10),
    (0x1058, 0x1059, 12),
    (0x105A, 0x105D, 7),
    (0x105E, 0x1060, 12),
    (0x1061, 0x1061, 7),
    (0x1062, 0x1064, 10),
    (0x1065, 0x1066, 7),
    (0x1067, 0x106D, 10),
    (0x106E, 0x1070, 7),
    (0x1071, 0x1074, 12),
    (0x1075, 0x1081, 7),
    (0x1082, 0x1082, 12),
    (0x1083, 0x1084, 10),
    (0x1085, 0x1086, 12),
    (0x1087, 0x108C, 10),
    (0x108D, 0x108D, 12),
    (0x108E, 0x108E, 7),
    (0x108F, 0x108F, 10),
    (0x1090, 0x1099, 13),
    (0x109A, 0x109C, 10),
    (0x109D, 0x109D, 12),
    (0x109E, 0x109F, 26),
    (0x10A0, 0x10C5, 9),
    (0x10C7, 0x10C7, 9),
    (0x10CD, 0x10CD, 9),
    (0x10D0, 0x10FA, 5),
    (0x10FB, 0x10FB, 21),
    (0x10FC, 0x10FC, 6),
    (0x10FD, 0x10FF, 5),
    (0x1100, 0x1248, 7),
    (0x124A, 0x124D, 7),
    (0x1250, 0x1256, 7),
    (0x1258, 0x1258, 7),
    (0x125A, 0x125D, 7),
    (0x1260, 0x1288, 7),
    (0x128A, 0x128D, 7),
    (0x1290, 0x12B0, 7),
    (0x12B2, 0x12B5, 7),
    (0x12B8, 0x12BE, 7),
    (0x12C0, 0x12C0, 7),
    (0x12C2, 0x12C5, 7),
    (0x12C8, 0x12D6, 7),
    (0x12D8, 0x1310, 7),
    (0x1312, 0x1315, 7),
    (0x1318, 0x135A, 7),
    (0x135D, 0x135F, 12),
    (0x1360, 0x1368, 21),
    (0x1369, 0x137C, 15),
    (0x1380, 0x138F, 7),
    (0x1390, 0x1399, 26),
    (0x13A0, 0x13F5, 9),
    (0x13F8, 0x13FD, 5),
    (0x1400, 0x1400, 17),
    (0x1401, 0x166C, 7),
    (0x166D, 0x166D, 26),
    (0x166E, 0x166E, 21),
    (0x166F, 0x167F, 7),
    (0x1680, 0x1680, 29),
    (0x1681, 0x169A, 7),
    (0x169B, 0x169B, 22),
    (0x169C, 0x169C, 18),
    (0x16A0, 0x16EA, 7),
    (0x16EB, 0x16ED, 21),
    (0x16EE, 0x16F0, 14),
    (0x16F1, 0x16F8, 7),
    (0x1700, 0x1711, 7),
    (0x1712, 0x1714, 12),
    (0x1715, 0x1715, 10),
    (0x171F, 0x1731, 7),
    (0x1732, 0x1733, 12),
    (0x1734, 0x1734, 10),
    (0x1735, 0x1736, 21),
    (0x1740, 0x1751, 7),
    (0x1752, 0x1753, 12),
    (0x1760, 0x176C, 7),
    (0x176E, 0x1770, 7),
    (0x1772, 0x1773, 12),
    (0x1780, 0x17B3, 7),
    (0x17B4, 0x17B5, 12),
    (0x17B6, 0x17B6, 10),
    (0x17B7, 0x17BD, 12),
    (0x17BE, 0x17C5, 10),
    (0x17C6, 0x17C6, 12),
    (0x17C7, 0x17C8, 10),
    (0x17C9, 0x17D3, 12),
    (0x17D4, 0x17D6, 21),
    (0x17D7, 0x17D7, 6),
    (0x17D8, 0x17DA, 21),
    (0x17DB, 0x17DB, 23),
    (0x17DC, 0x17DC, 7),
    (0x17DD, 0x17DD, 12),
    (0x17E0, 0x17E9, 13),
    (0x17F0, 0x17F9, 15),
    (0x1800, 0x1805, 21),
    (0x1806, 0x1806, 17),
    (0x1807, 0x180A, 21),
    (0x180B, 0x180D, 12),
    (0x180E, 0x180E, 1),
    (0x180F, 0x180F, 12),
    (0x1810, 0x1819, 13),
    (0x1820, 0x1842, 7),
    (0x1843, 0x1843, 6),
    (0x1844, 0x1878, 7),
    (0x1880, 0x1884, 7),
    (0x1885, 0x1886, 12),
    (0x1887, 0x18A8, 7),
    (0x18A9, 0x18A9, 12),
    (0x18AA, 0x18AA, 7),
    (0x18B0, 0x18F5, 7),
    (0x1900, 0x191E, 7),
    (0x1920, 0x1922, 12),
    (0x1923, 0x1926, 10),
    (0x1927, 0x1928, 12),
    (0x1929, 0x192B, 10),
    (0x1930, 0x1931, 10),
    (0x1932, 0x1932, 12),
    (0x1933, 0x1938, 10),
    (0x1939, 0x193B, 12),
    (0x1940, 0x1940, 26),
    (0x1944, 0x1945, 21),
    (0x1946, 0x194F, 13),
    (0x1950, 0x196D, 7),
    (0x1970, 0x1974, 7),
    (0x1980, 0x19AB, 7),
    (0x19B0, 0x19C9, 7),
    (0x19D0, 0x19D9, 13),
    (0x19DA, 0x19DA, 15),
    (0x19DE, 0x19FF, 26),
    (0x1A00, 0x1A16, 7),
    (0x1A17, 0x1A18, 12),
    (0x1A19, 0x1A1A, 10),
    (0x1A1B, 0x1A1B, 12),
    (0x1A1E, 0x1A1F, 21),
    (0x1A20, 0x1A54, 7),
    (0x1A55, 0x1A55, 10),
    (0x1A56, 0x1A56, 12),
    (0x1A57, 0x1A57, 10),
    (0x1A58, 0x1A5E, 12),
    (0x1A60, 0x1A60, 12),
    (0x1A61, 0x1A61, 10),
    (0x1A62, 0x1A62, 12),
    (0x1A63, 0x1A64, 10),
    (0x1A65, 0x1A6C, 12),
    (0x1A6D, 0x1A72, 10),
    (0x1A73, 0x1A7C, 12),
    (0x1A7F, 0x1A7F, 12),
    (0x1A80, 0x1A89, 13),
    (0x1A90, 0x1A99, 13),
    (0x1AA0, 0x1AA6, 21),
    (0x1AA7, 0x1AA7, 6),
    (0x1AA8, 0x1AAD, 21),
    (0x1AB0, 0x1ABD, 12),
    (0x1ABE, 0x1ABE, 11),
    (0x1ABF, 0x1ACE, 12),
    (0x1B00, 0x1B03, 12),
    (0x1B04, 0x1B04, 10),
    (0x1B05, 0x1B33, 7),
    (0x1B34, 0x1B34, 12),
    (0x1B35, 0x1B35, 10),
    (0x1B36, 0x1B3A, 12),
    (0x1B3B, 0x1B3B, 10),
    (0x1B3C, 0x1B3C, 12),
    (0x1B3D, 0x1B41, 10),
    (0x1B42, 0x1B42, 12),
    (0x1B43, 0x1B44, 10),
    (0x1B45, 0x1B4C, 7),
    (0x1B50, 0x1B59, 13),
    (0x1B5A, 0x1B60, 21),
    (0x1B61, 0x1B6A, 26),
    (0x1B6B, 0x1B73, 12),
    (0x1B74, 0x1B7C, 26),
    (0x1B7D, 0x1B7E, 21),
    (0x1B80, 0x1B81, 12),
    (0x1B82, 0x1B82, 10),
    (0x1B83, 0x1BA0, 7),
    (0x1BA1, 0x1BA1, 10),
    (0x1BA2, 0x1BA5, 12),
    (0x1BA6, 0x1BA7, 10),
    (0x1BA8, 0x1BA9, 12),
    (0x1BAA, 0x1BAA, 10),
    (0x1BAB, 0x1BAD, 12),
    (0x1BAE, 0x1BAF, 7),
    (0x1BB0, 0x1BB9, 13),
    (0x1BBA, 0x1BE5, 7),
    (0x1BE6, 0x1BE6, 12),
    (0x1BE7, 0x1BE7, 10),
    (0x1BE8, 0x1BE9, 12),
    (0x1BEA, 0x1BEC, 10),
    (0x1BED, 0x1BED, 12),
    (0x1BEE, 0x1BEE, 10),
    (0x1BEF, 0x1BF1, 12),
    (0x1BF2, 0x1BF3, 10),
    (0x1BFC, 0x1BFF, 21),
    (0x1C00, 0x1C23, 7),
    (0x1C24, 0x1C2B, 10),
    (0x1C2C, 0x1C33, 12),
    (0x1C34, 0x1C35, 10),
    (0x1C36, 0x1C37, 12),
    (0x1C3B, 0x1C3F, 21),
    (0x1C40, 0x1C49, 13),
    (0x1C4D, 0x1C4F, 7),
    (0x1C50, 0x1C59, 13),
    (0x1C5A, 0x1C77, 7),
    (0x1C78, 0x1C7D, 6),
    (0x1C7E, 0x1C7F, 21),
    (0x1C80, 0x1C88, 5),
    (0x1C90, 0x1CBA, 9),
    (0x1CBD, 0x1CBF, 9),
    (0x1CC0, 0x1CC7, 21),
    (0x1CD0, 0x1CD2, 12),
    (0x1CD3, 0x1CD3, 21),
    (0x1CD4, 0x1CE0, 12),
    (0x1CE1, 0x1CE1, 10),
    (0x1CE2, 0x1CE8, 12),
    (0x1CE9, 0x1CEC, 7),
    (0x1CED, 0x1CED, 12),
    (0x1CEE, 0x1CF3, 7),
    (0x1CF4, 0x1CF4, 12),
    (0x1CF5, 0x1CF6, 7),
    (0x1CF7, 0x1CF7, 10),
    (0x1CF8, 0x1CF9, 12),
    (0x1CFA, 0x1CFA, 7),
    (0x1D00, 0x1D2B, 5),
    (0x1D2C, 0x1D6A, 6),
    (0x1D6B, 0x1D77, 5),
    (0x1D78, 0x1D78, 6),
    (0x1D79, 0x1D9A, 5),
    (0x1D9B, 0x1DBF, 6),
    (0x1DC0, 0x1DFF, 12),
    (0x1E00, 0x1E00, 9),
    (0x1E01, 0x1E01, 5),
    (0x1E02, 0x1E02, 9),
    (0x1E03, 0x1E03, 5),
    (0x1E04, 0x1E04, 9),
    (0x1E05, 0x1E05, 5),
    (0x1E06, 0x1E06, 9),
    (0x1E07, 0x1E07, 5),
    (0x1E08, 0x1E08, 9),
    (0x1E09, 0x1E09, 5),
    (0x1E0A, 0x1E0A, 9),
    (0x1E0B, 0x1E0B, 5),
    (0x1E0C, 0x1E0C, 9),
    (0x1E0D, 0x1E0D, 5),
    (0x1E0E, 0x1E0E, 9),
    (0x1E0F, 0x1E0F, 5),
    (0x1E10, 0x1E10, 9),
    (0x1E11, 0x1E11, 5),
    (0x1E12, 0x1E12, 9),
    (0x1E13, 0x1E13, 5),
    (0x1E14, 0x1E14, 9),
    (0x1E15, 0x1E15, 5),
    (0x1E16, 0x1E16, 9),
    (0x1E17, 0x1E17, 5),
    (0x1E18, 0x1E18, 9),
    (0x1E19, 0x1E19, 5),
    (0x1E1A, 0x1E1A, 9),
    (0x1E1B, 0x1E1B, 5),
    (0x1E1C, 0x1E1C, 9),
    (0x1E1D, 0x1E1D, 5),
    (0x1E1E, 0x1E1E, 9),
    (0x1E1F, 0x1E1F, 5),
    (0x1E20, 0x1E20, 9),
    (0x1E21, 0x1E21, 5),
    (0x1E22, 0x1E22, 9),
    (0x1E23, 0x1E23, 5),
    (0x1E24, 0x1E24, 9),
    (0x1E25, 0x1E25, 5),
    (0x1E26, 0x1E26, 9),
    (0x1E27, 0x1E27, 5),
    (0x1E28, 0x1E28, 9),
    (0x1E29, 0x1E29, 5),
    (0x1E2A, 0x1E2A, 9),
    (0x1E2B, 0x1E2B, 5),
    (0x1E2C, 0x1E2C, 9),
    (0x1E2D, 0x1E2D, 5),
    (0x1E2E, 0x1E2E, 9),
    (0x1E2F, 0x1E2F, 5),
    (0x1E30, 0x1E30, 9),
    (0x1E31, 0x1E31, 5),
    (0x1E32, 0x1E32, 9),
    (0x1E33, 0x1E33, 5),
    (0x1E34, 0x1E34, 9),
    (0x1E35, 0x1E35, 5),
    (0x1E36, 0x1E36, 9),
    (0x1E37, 0x1E37, 5),
    (0x1E38, 0x1E38, 9),
    (0x1E39, 0x1E39, 5),
    (0x1E3A, 0x1E3A, 9),
    (0x1E3B, 0x1E3B, 5),
    (0x1E3C, 0x1E3C, 9),
    (0x1E3D, 0x1E3D, 5),
    (0x1E3E, 0x1E3E, 9),
    (0x1E3F, 0x1E3F, 5),
    (0x1E40, 0x1E40, 9),
    (0x1E41, 0x1E41, 5),
    (0x1E42, 0x1E42, 9),
    (0x1E43, 0x1E43, 5),
    (0x1E44, 0x1E44, 9),
    (0x1E45, 0x1E45, 5),
    (0x1E46, 0x1E46, 9),
    (0x1E47, 0x1E47, 5),
    (0x1E48, 0x1E48, 9),
    (0x1E49, 0x1E49, 5),
    (0x1E4A, 0x1E4A, 9),
    (0x1E4B, 0x1E4B, 5),
    (0x1E4C, 0x1E4C, 9),
    (0x1E4D, 0x1E4D, 5),
    (0x1E4E, 0x1E4E, 9),
    (0x1E4F, 0x1E4F, 5),
    (0x1E50, 0x1E50, 9),
    (0x1E51, 0x1E51, 5),
    (0x1E52, 0x1E52, 9),
    (0x1E53, 0x1E53, 5),
    (0x1E54, 0x1E54, 9),
    (0x1E55, 0x1E55, 5),
    (0x1E56, 0x1E56, 9),
    (0x1E57, 0x1E57, 5),
    (0x1E58, 0x1E58, 9),
    (0x1E59, 0x1E59, 5),
    (0x1E5A, 0x1E5A, 9),
    (0x1E5B, 0x1E5B, 5),
    (0x1E5C, 0x1E5C, 9),
    (0x1E5D, 0x1E5D, 5),
    (0x1E5E, 0x1E5E, 9),
    (0x1E5F, 0x1E5F, 5),
    (0x1E60, 0x1E60, 9),
    (0x1E61, 0x1E61, 5),
    (0x1E62, 0x1E62, 9),
    (0x1E63, 0x1E63, 5),
    (0x1E64, 0x1E64, 9),
    (0x1E65, 0x1E65, 5),
    (0x1E66, 0x1E66, 9),
    (0x1E67, 0x1E67, 5),
    (0x1E68, 0x1E68, 9),
    (0x1E69, 0x1E69, 5),
    (0x1E6A, 0x1E6A, 9),
    (0x1E6B, 0x1E6B, 5),
    (0x1E6C, 0x1E6C, 9),
    (0x1E6D, 0x1E6D, 5),
    (0x1E6E, 0x1E6E, 9),
    (0x1E6F, 0x1E6F, 5),
    (0x1E70, 0x1E70, 9),
    (0x1E71, 0x1E71, 5),
    (0x1E72, 0x1E72, 9),
    (0x1E73, 0x1E73, 5),
    (0x1E74, 0x1E74, 9),
    (0x1E75, 0x1E75, 5),
    (0x1E76, 0x1E76, 9),
    (0x1E77, 0x1E77, 5),
    (0x1E78, 0x1E78, 9),
    (0x1E79, 0x1E79, 5),
    (0x1E7A, 0x1E7A, 9),
    (0x1E7B, 0x1E7B, 5),
    (0x1E7C, 0x1E7C, 9),
    (0x1E7D, 0x1E7D, 5),
    (0x1E7E, 0x1E7E, 9),
    (0x1E7F, 0x1E7F, 5),
    (0x1E80, 0x1E80, 9),
    (0x1E81, 0x1E81, 5),
    (0x1E82, 0x1E82, 9),
    (0x1E83, 0x1E83, 5),
    (0x1E84, 0x1E84, 9),
    (0x1E85, 0x1E85, 5),
    (0x1E86, 0x1E86, 9),
    (0x1E87, 0x1E87, 5),
    (0x1E88, 0x1E88, 9),
    (0x1E89, 0x1E89, 5),
    (0x1E8A, 0x1E8A, 9),
    (0x1E8B, 0x1E8B, 5),
    (0x1E8C, 0x1E8C, 9),
    (0x1E8D, 0x1E8D, 5),
    (0x1E8E, 0x1E8E, 9),
    (0x1E8F, 0x1E8F, 5),
    (0x1E90, 0x1E90, 9),
    (0x1E91, 0x1E91, 5),
    (0x1E92, 0x1E92, 9),
    (0x1E93, 0x1E93, 5),
    (0x1E94, 0x1E94, 9),
    (0x1E95, 0x1E9D, 5),
    (0x1E9E, 0x1E9E, 9),
    (0x1E9F, 0x1E9F, 5),
    (0x1EA0, 0x1EA0, 9),
    (0x1EA1, 0x1EA1, 5),
    (0x1EA2, 0x1EA2, 9),
    (0x1EA3, 0x1EA3, 5),
    (0x1EA4, 0x1EA4, 9),
    (0x1EA5, 0x1EA5, 5),
    (0x1EA6, 0x1EA6, 9),
    (0x1EA7, 0x1EA7, 5),
    (0x1EA8, 0x1EA8, 9),
    (0x1EA9, 0x1EA9, 5),
    (0x1EAA, 0x1EAA, 9),
    (0x1EAB, 0x1EAB, 5),
    (0x1EAC, 0x1EAC, 9),
    (0x1EAD, 0x1EAD, 5),
    (0x1EAE, 0x1EAE, 9),
    (0x1EAF, 0x1EAF, 5),
    (0x1EB0, 0x1EB0, 9),
    (0x1EB1, 0x1EB1, 5),
    (0x1EB2, 0x1EB2, 9),
    (0x1EB3, 0x1EB3, 5),
    (0x1EB4, 0x1EB4, 9),
    (0x1EB5, 0x1EB5, 5),
    (0x1EB6, 0x1EB6, 9),
    (0x1EB7, 0x1EB7, 5),
    (0x1EB8, 0x1EB8, 9),
    (0x1EB9, 0x1EB9, 5),
    (0x1EBA, 0x1EBA, 9),
    (0x1EBB, 0x1EBB, 5),
    (0x1EBC, 0x1EBC, 9),
    (0x1EBD, 0x1EBD, 5),
    (0x1EBE, 0x1EBE, 9),
    (0x1EBF, 0x1EBF, 5),
    (0x1EC0, 0x1EC0, 9),
    (0x1EC1, 0x1EC1, 5),
    (0x1EC2, 0x1EC2, 9),
    (0x1EC3, 0x1EC3, 5),
    (0x1EC4, 0x1EC4, 9),
    (0x1EC5, 0x1EC5, 5),
    (0x1EC6, 0x1EC6, 9),
    (0x1EC7, 0x1EC7, 5),
    (0x1EC8, 0x1EC8, 9),
    (0x1EC9, 0x1EC9, 5),
    (0x1ECA, 0x1ECA, 9),
    (0x1ECB, 0x1ECB, 5),
    (0x1ECC, 0x1ECC, 9),
    (0x1ECD, 0x1ECD, 5),
    (0x1ECE, 0x1ECE, 9),
    (0x1ECF, 0x1ECF, 5),
    (0x1ED0, 0x1ED0, 9),
    (0x1ED1, 0x1ED1, 5),
    (0x1ED2, 0x1ED2, 9),
    (0x1ED3, 0x1ED3, 5),
    (0x1ED4, 0x1ED4, 9),
    (0x1ED5, 0x1ED5, 5),
    (0x1ED6, 0x1ED6, 9),
    (0x1ED7, 0x1ED7, 5),
    (0x1ED8, 0x1ED8, 9),
    (0x1ED9, 0x1ED9, 5),
    (0x1EDA, 0x1EDA, 9),
    (0x1EDB, 0x1EDB, 5),
    (0x1EDC, 0x1EDC, 9),
    (0x1EDD, 0x1EDD, 5),
    (0x1EDE, 0x1EDE, 9),
    (0x1EDF, 0x1EDF, 5),
    (0x1EE0, 0x1EE0, 9),
    (0x1EE1, 0x1EE1, 5),
    (0x1EE2, 0x1EE2, 9),
    (0x1EE3, 0x1EE3, 5),
    (0x1EE4, 0x1EE4, 9),
    (0x1EE5, 0x1EE5, 5),
    (0x1EE6, 0x1EE6, 9),
    (0x1EE7, 0x1EE7, 5),
    (0x1EE8, 0x1EE8, 9),
    (0x1EE9, 0x1EE9, 5),
    (0x1EEA, 0x1EEA, 9),
    (0x1EEB, 0x1EEB, 5),
    (0x1EEC, 0x1EEC, 9),
    (0x1EED, 0x1EED, 5),
    (0x1EEE, 0x1EEE, 9),
    (0x1EEF, 0x1EEF, 5),
    (0x1EF0, 0x1EF0, 9),
    (0x1EF1, 0x1EF1, 5),
    (0x1EF2, 0x1EF2, 9),
    (0x1EF3, 0x1EF3, 5),
    (0x1EF4, 0x1EF4, 9),
    (0x1EF5, 0x1EF5, 5),
    (0x1EF6, 0x1EF6, 9),
    (0x1EF7, 0x1EF7, 5),
    (0x1EF8, 0x1EF8, 9),
    (0x1EF9, 0x1EF9, 5),
    (0x1EFA, 0x1EFA, 9),
    (0x1EFB, 0x1EFB, 5),
    (0x1EFC, 0x1EFC, 9),
    (0x1EFD, 0x1EFD, 5),
    (0x1EFE, 0x1EFE, 9),
    (0x1EFF, 0x1F07, 5),
    (0x1F08, 0x1F0F, 9),
    (0x1F10, 0x1F15, 5),
    (0x1F18, 0x1F1D, 9),
    (0x1F20, 0x1F27, 5),
    (0x1F28, 0x1F2F, 9),
    (0x1F30, 0x1F37, 5),
    (0x1F38, 0x1F3F, 9),
    (0x1F40, 0x1F45, 5),
    (0x1F48, 0x1F4D, 9),
    (0x1F50, 0x1F57, 5),
    (0x1F59, 0x1F59, 9),
    (0x1F5B, 0x1F5B, 9),
    (0x1F5D, 0x1F5D, 9),
    (0x1F5F, 0x1F5F, 9),
    (0x1F60, 0x1F67, 5),
    (0x1F68, 0x1F6F, 9),
    (0x1F70, 0x1F7D, 5),
    (0x1F80, 0x1F87, 5),
    (0x1F88, 0x1F8F, 8),
    (0x1F90, 0x1F97, 5),
    (0x1F98, 0x1F9F, 8),
    (0x1FA0, 0x1FA7, 5),
    (0x1FA8, 0x1FAF, 8),
    (0x1FB0, 0x1FB4, 5),
    (0x1FB6, 0x1FB7, 5),
    (0x1FB8, 0x1FBB, 9),
    (0x1FBC, 0x1FBC, 8),
    (0x1FBD, 0x1FBD, 24),
    (0x1FBE, 0x1FBE, 5),
    (0x1FBF, 0x1FC1, 24),
    (0x1FC2, 0x1FC4, 5),
    (0x1FC6, 0x1FC7, 5),
    (0x1FC8, 0x1FCB, 9),
    (0x1FCC, 0x1FCC, 8),
    (0x1FCD, 0x1FCF, 24),
    (0x1FD0, 0x1FD3, 5),
    (0x1FD6, 0x1FD7, 5),
    (0x1FD8, 0x1FDB, 9),
    (0x1FDD, 0x1FDF, 24),
    (0x1FE0, 0x1FE7, 5),
    (0x1FE8, 0x1FEC, 9),
    (0x1FED, 0x1FEF, 24),
    (0x1FF2, 0x1FF4, 5),
    (0x1FF6, 0x1FF7, 5),
    (0x1FF8, 0x1FFB, 9),
    (0x1FFC, 0x1FFC, 8),
    (0x1FFD, 0x1FFE, 24),
    (0x2000, 0x200A, 29),
    (0x200B, 0x200F, 1),
    (0x2010, 0x2015, 17),
    (0x2016, 0x2017, 21),
    (0x2018, 0x2018, 20),
    (0x2019, 0x2019, 19),
    (0x201A, 0x201A, 22),
    (0x201B, 0x201C, 20),
    (0x201D, 0x201D, 19),
    (0x201E, 0x201E, 22),
    (0x201F, 0x201F, 20),
    (0x2020, 0x2027, 21),
    (0x2028, 0x2028, 27),
    (0x2029, 0x2029, 28),
    (0x202A, 0x202E, 1),
    (0x202F, 0x202F, 29),
    (0x2030, 0x2038, 21),
    (0x2039, 0x2039, 20),
    (0x203A, 0x203A, 19),
    (0x203B, 0x203E, 21),
    (0x203F, 0x2040, 16),
    (0x2041, 0x2043, 21),
    (0x2044, 0x2044, 25),
    (0x2045, 0x2045, 22),
    (0x2046, 0x2046, 18),
    (0x2047, 0x2051, 21),
    (0x2052, 0x2052, 25),
    (0x2053, 0x2053, 21),
    (0x2054, 0x2054, 16),
    (0x2055, 0x205E, 21),
    (0x205F, 0x205F, 29),
    (0x2060, 0x2064, 1),
    (0x2066, 0x206F, 1),
    (0x2070, 0x2070, 15),
    (0x2071, 0x2071, 6),
    (0x2074, 0x2079, 15),
    (0x207A, 0x207C, 25),
    (0x207D, 0x207D, 22),
    (0x207E, 0x207E, 18),
    (0x207F, 0x207F, 6),
    (0x2080, 0x2089, 15),
    (0x208A, 0x208C, 25),
    (0x208D, 0x208D, 22),
    (0x208E, 0x208E, 18),
    (0x2090, 0x209C, 6),
    (0x20A0, 0x20C0, 23),
    (0x20D0, 0x20DC, 12),
    (0x20DD, 0x20E0, 11),
    (0x20E1, 0x20E1, 12),
    (0x20E2, 0x20E4, 11),
    (0x20E5, 0x20F0, 12),
    (0x2100, 0x2101, 26),
    (0x2102, 0x2102, 9),
    (0x2103, 0x2106, 26),
    (0x2107, 0x2107, 9),
    (0x2108, 0x2109, 26),
    (0x210A, 0x210A, 5),
    (0x210B, 0x210D, 9),
    (0x210E, 0x210F, 5),
    (0x2110, 0x2112, 9),
    (0x2113, 0x2113, 5),
    (0x2114, 0x2114, 26),
    (0x2115, 0x2115, 9),
    (0x2116, 0x2117, 26),
    (0x2118, 0x2118, 25),
    (0x2119, 0x211D, 9),
    (0x211E, 0x2123, 26),
    (0x2124, 0x2124, 9),
    (0x2125, 0x2125, 26),
    (0x2126, 0x2126, 9),
    (0x2127, 0x2127, 26),
    (0x2128, 0x2128, 9),
    (0x2129, 0x2129, 26),
    (0x212A, 0x212D, 9),
    (0x212E, 0x212E, 26),
    (0x212F, 0x212F, 5),
    (0x2130, 0x2133, 9),
    (0x2134, 0x2134, 5),
    (0x2135, 0x2138, 7),
    (0x2139, 0x2139, 5),
    (0x213A, 0x213B, 26),
    (0x213C, 0x213D, 5),
    (0x213E, 0x213F, 9),
    (0x2140, 0x2144, 25),
    (0x2145, 0x2145, 9),
    (0x2146, 0x2149, 5),
    (0x214A, 0x214A, 26),
    (0x214B, 0x214B, 25),
    (0x214C, 0x214D, 26),
    (0x214E, 0x214E, 5),
    (0x214F, 0x214F, 26),
    (0x2150, 0x215F, 15),
    (0x2160, 0x2182, 14),
    (0x2183, 0x2183, 9),
    (0x2184, 0x2184, 5),
    (0x2185, 0x2188, 14),
    (0x2189, 0x2189, 15),
    (0x218A, 0x218B, 26),
    (0x2190, 0x2194, 25),
    (0x2195, 0x2199, 26),
    (0x219A, 0x219B, 25),
    (0x219C, 0x219F, 26),
    (0x21A0, 0x21A0, 25),
    (0x21A1, 0x21A2, 26),
    (0x21A3, 0x21A3, 25),
    (0x21A4, 0x21A5, 26),
    (0x21A6, 0x21A6, 25),
    (0x21A7, 0x21AD, 26),
    (0x21AE, 0x21AE, 25),
    (0x21AF, 0x21CD, 26),
    (0x21CE, 0x21CF, 25),
    (0x21D0, 0x21D1, 26),
    (0x21D2, 0x21D2, 25),
    (0x21D3, 0x21D3, 26),
    (0x21D4, 0x21D4, 25),
    (0x21D5, 0x21F3, 26),
    (0x21F4, 0x22FF, 25),
    (0x2300, 0x2307, 26),
    (0x2308, 0x2308, 22),
    (0x2309, 0x2309, 18),
    (0x230A, 0x230A, 22),
    (0x230B, 0x230B, 18),
    (0x230C, 0x231F, 26),
    (0x2320, 0x2321, 25),
    (0x2322, 0x2328, 26),
    (0x2329, 0x2329, 22),
    (0x232A, 0x232A, 18),
    (0x232B, 0x237B, 26),
    (0x237C, 0x237C, 25),
    (0x237D, 0x239A, 26),
    (0x239B, 0x23B3, 25),
    (0x23B4, 0x23DB, 26),
    (0x23DC, 0x23E1, 25),
    (0x23E2, 0x2426, 26),
    (0x2440, 0x244A, 26),
    (0x2460, 0x249B, 15),
    (0x249C, 0x24E9, 26),
    (0x24EA, 0x24FF, 15),
    (0x2500, 0x25B6, 26),
    (0x25B7, 0x25B7, 25),
    (0x25B8, 0x25C0, 26),
    (0x25C1, 0x25C1, 25),
    (0x25C2, 0x25F7, 26),
    (0x25F8, 0x25FF, 25),
    (0x2600, 0x266E, 26),
    (0x266F, 0x266F, 25),
    (0x2670, 0x2767, 26),
    (0x2768, 0x2768, 22),
    (0x2769, 0x2769, 18),
    (0x276A, 0x276A, 22),
    (0x276B, 0x276B, 18),
    (0x276C, 0x276C, 22),
    (0x276D, 0x276D, 18),
    (0x276E, 0x276E, 22),
    (0x276F, 0x276F, 18),
    (0x2770, 0x2770, 22),
    (0x2771, 0x2771, 18),
    (0x2772, 0x2772, 22),
    (0x2773, 0x2773, 18),
    (0x2774, 0x2774, 22),
    (0x2775, 0x2775, 18),
    (0x2776, 0x2793, 15),
    (0x2794, 0x27BF, 26),
    (0x27C0, 0x27C4, 25),
    (0x27C5, 0x27C5, 22),
    (0x27C6, 0x27C6, 18),
    (0x27C7, 0x27E5, 25),
    (0x27E6, 0x27E6, 22),
    (0x27E7, 0x27E7, 18),
    (0x27E8, 0x27E8, 22),
    (0x27E9, 0x27E9, 18),
    (0x27EA, 0x27EA, 22),
    (0x27EB, 0x27EB, 18),
    (0x27EC, 0x27EC, 22),
    (0x27ED, 0x27ED, 18),
    (0x27EE, 0x27EE, 22),
    (0x27EF, 0x27EF, 18),
    (0x27F0, 0x27FF, 25),
    (0x2800, 0x28FF, 26),
    (0x2900, 0x2982, 25),
    (0x2983, 0x2983, 22),
    (0x2984, 0x2984, 18),
    (0x2985, 0x2985, 22),
    (0x2986, 0x2986, 18),
    (0x2987, 0x2987, 22),
    (0x2988, 0x2988, 18),
    (0x2989, 0x2989, 22),
    (0x298A, 0x298A, 18),
    (0x298B, 0x298B, 22),
    (0x298C, 0x298C, 18),
    (0x298D, 0x298D, 22),
    (0x298E, 0x298E, 18),
    (0x298F, 0x298F, 22),
    (0x2990, 0x2990, 18),
    (0x2991, 0x2991, 22),
    (0x2992, 0x2992, 18),
    (0x2993, 0x2993, 22),
    (0x2994, 0x2994, 18),
    (0x2995, 0x2995, 22),
    (0x2996, 0x2996, 18),
    (0x2997, 0x2997, 22),
    (0x2998, 0x2998, 18),
    (0x2999, 0x29D7, 25),
    (0x29D8, 0x29D8, 22),
    (0x29D9, 0x29D9, 18),
    (0x29DA, 0x29DA, 22),
    (0x29DB, 0x29DB, 18),
    (0x29DC, 0x29FB, 25),
    (0x29FC, 0x29FC, 22),
    (0x29FD, 0x29FD, 18),
    (0x29FE, 0x2AFF, 25),
    (0x2B00, 0x2B2F, 26),
    (0x2B30, 0x2B44, 25),
    (0x2B45, 0x2B46, 26),
    (0x2B47, 0x2B4C, 25),
    (0x2B4D, 0x2B73, 26),
    (0x2B76, 0x2B95, 26),
    (0x2B97, 0x2BFF, 26),
    (0x2C00, 0x2C2F, 9),
    (0x2C30, 0x2C5F, 5),
    (0x2C60, 0x2C60, 9),
    (0x2C61, 0x2C61, 5),
    (0x2C62, 0x2C64, 9),
    (0x2C65, 0x2C66, 5),
    (0x2C67, 0x2C67, 9),
    (0x2C68, 0x2C68, 5),
    (0x2C69, 0x2C69, 9),
    (0x2C6A, 0x2C6A, 5),
    (0x2C6B, 0x2C6B, 9),
    (0x2C6C, 0x2C6C, 5),
    (0x2C6D, 0x2C70, 9),
    (0x2C71, 0x2C71, 5),
    (0x2C72, 0x2C72, 9),
    (0x2C73, 0x2C74, 5),
    (0x2C75, 0x2C75, 9),
    (0x2C76, 0x2C7B, 5),
    (0x2C7C, 0x2C7D, 6),
    (0x2C7E, 0x2C80, 9),
    (0x2C81, 0x2C81, 5),
    (0x2C82, 0x2C82, 9),
    (0x2C83, 0x2C83, 5),
    (0x2C84, 0x2C84, 9),
    (0x2C85, 0x2C85, 5),
    (0x2C86, 0x2C86, 9),
    (0x2C87, 0x2C87, 5),
    (0x2C88, 0x2C88, 9),
    (0x2C89, 0x2C89, 5),
    (0x2C8A, 0x2C8A, 9),
    (0x2C8B, 0x2C8B, 5),
    (0x2C8C, 0x2C8C, 9),
    (0x2C8D, 0x2C8D, 5),
    (0x2C8E, 0x2C8E, 9),
    (0x2C8F, 0x2C8F, 5),
    (0x2C90, 0x2C90, 9),
    (0x2C91, 0x2C91, 5),
    (0x2C92, 0x2C92, 9),
    (0x2C93, 0x2C93, 5),
    (0x2C94, 0x2C94, 9),
    (0x2C95, 0x2C95, 5),
    (0x2C96, 0x2C96, 9),
    (0x2C97, 0x2C97, 5),
    (0x2C98, 0x2C98, 9),
    (0x2C99, 0x2C99, 5),
    (0x2C9A, 0x2C9A, 9),
    (0x2C9B, 0x2C9B, 5),
    (0x2C9C, 0x2C9C, 9),
    (0x2C9D, 0x2C9D, 5),
    (0x2C9E, 0x2C9E, 9),
    (0x2C9F, 0x2C9F, 5),
    (0x2CA0, 0x2CA0, 9),
    (0x2CA1, 0x2CA1, 5),
    (0x2CA2, 0x2CA2, 9),
    (0x2CA3, 0x2CA3, 5),
    (0x2CA4, 0x2CA4, 9),
    (0x2CA5, 0x2CA5, 5),
    (0x2CA6, 0x2CA6, 9),
    (0x2CA7, 0x2CA7, 5),
    (0x2CA8, 0x2CA8, 9),
    (0x2CA9, 0x2CA9, 5),
    (0x2CAA, 0x2CAA, 9),
    (0x2CAB, 0x2CAB, 5),
    (0x2CAC, 0x2CAC, 9),
    (0x2CAD, 0x2CAD, 5),
    (0x2CAE, 0x2CAE, 9),
    (0x2CAF, 0x2CAF, 5),
    (0x2CB0, 0x2CB0, 9),
    (0x2CB1, 0x2CB1, 5),
    (0x2CB2, 0x2CB2, 9),
    (0x2CB3, 0x2CB3, 5),
    (0x2CB4, 0x2CB4, 9),
    (0x2CB5, 0x2CB5, 5),
    (0x2CB6, 0x2CB6, 9),
    (0x2CB7, 0x2CB7, 5),
    (0x2CB8, 0x2CB8, 9),
    (0x2CB9, 0x2CB9, 5),
    (0x2CBA, 0x2CBA, 9),
    (0x2CBB, 0x2CBB, 5),
    (0x2CBC, 0x2CBC, 9),
    (0x2CBD, 0x2CBD, 5),
    (0x2CBE, 0x2CBE, 9),
    (0x2CBF, 0x2CBF, 5),
    (0x2CC0, 0x2CC0, 9),
    (0x2CC1, 0x2CC1, 5),
    (0x2CC2, 0x2CC2, 9),
    (0x2CC3, 0x2CC3, 5),
    (0x2CC4, 0x2CC4, 9),
    (0x2CC5, 0x2CC5, 5),
    (0x2CC6, 0x2CC6, 9),
    (0x2CC7, 0x2CC7, 5),
    (0x2CC8, 0x2CC8, 9),
    (0x2CC9, 0x2CC9, 5),
    (0x2CCA, 0x2CCA, 9),
    (0x2CCB, 0x2CCB, 5),
    (0x2CCC, 0x2CCC, 9),
    (0x2CCD, 0x2CCD, 5),
    (0x2CCE, 0x2CCE, 9),
    (0x2CCF, 0x2CCF, 5),
    (0x2CD0, 0x2CD0, 9),
    (0x2CD1, 0x2CD1, 5),
    (0x2CD2, 0x2CD2, 9),
    (0x2CD3, 0x2CD3, 5),
    (0x2CD4, 0x2CD4, 9),
    (0x2CD5, 0x2CD5, 5),
    (0x2CD6, 0x2CD6, 9),
    (0x2CD7, 0x2CD7, 5),
    (0x2CD8, 0x2CD8, 9),
    (0x2CD9, 0x2CD9, 5),
    (0x2CDA, 0x2CDA, 9),
    (0x2CDB, 0x2CDB, 5),
    (0x2CDC, 0x2CDC, 9),
    (0x2CDD, 0x2CDD, 5),
    (0x2CDE, 0x2CDE, 9),
    (0x2CDF, 0x2CDF, 5),
    (0x2CE0, 0x2CE0, 9),
    (0x2CE1, 0x2CE1, 5),
    (0x2CE2, 0x2CE2, 9),
    (0x2CE3, 0x2CE4, 5),
    (0x2CE5, 0x2CEA, 26),
    (0x2CEB, 0x2CEB, 9),
    (0x2CEC, 0x2CEC, 5),
    (0x2CED, 0x2CED, 9),
    (0x2CEE, 0x2CEE, 5),
    (0x2CEF, 0x2CF1, 12),
    (0x2CF2, 0x2CF2, 9),
    (0x2CF3, 0x2CF3, 5),
    (0x2CF9, 0x2CFC, 21),
    (0x2CFD, 0x2CFD, 15),
    (0x2CFE, 0x2CFF, 21),
    (0x2D00, 0x2D25, 5),
    (0x2D27, 0x2D27, 5),
    (0x2D2D, 0x2D2D, 5),
    (0x2D30, 0x2D67, 7),
    (0x2D6F, 0x2D6F, 6),
    (0x2D70, 0x2D70, 21),
    (0x2D7F, 0x2D7F, 12),
    (0x2D80, 0x2D96, 7),
    (0x2DA0, 0x2DA6, 7),
    (0x2DA8, 0x2DAE, 7),
    (0x2DB0, 0x2DB6, 7),
    (0x2DB8, 0x2DBE, 7),
    (0x2DC0, 0x2DC6, 7),
    (0x2DC8, 0x2DCE, 7),
    (0x2DD0, 0x2DD6, 7),
    (0x2DD8, 0x2DDE, 7),
    (0x2DE0, 0x2DFF, 12),
    (0x2E00, 0x2E01, 21),
    (0x2E02, 0x2E02, 20),
    (0x2E03, 0x2E03, 19),
    (0x2E04, 0x2E04, 20),
    (0x2E05, 0x2E05, 19),
    (0x2E06, 0x2E08, 21),
    (0x2E09, 0x2E09, 20),
    (0x2E0A, 0x2E0A, 19),
    (0x2E0B, 0x2E0B, 21),
    (0x2E0C, 0x2E0C, 20),
    (0x2E0D, 0x2E0D, 19),
    (0x2E0E, 0x2E16, 21),
    (0x2E17, 0x2E17, 17),
    (0x2E18, 0x2E19, 21),
    (0x2E1A, 0x2E1A, 17),
    (0x2E1B, 0x2E1B, 21),
    (0x2E1C, 0x2E1C, 20),
    (0x2E1D, 0x2E1D, 19),
    (0x2E1E, 0x2E1F, 21),
    (0x2E20, 0x2E20, 20),
    (0x2E21, 0x2E21, 19),
    (0x2E22, 0x2E22, 22),
    (0x2E23, 0x2E23, 18),
    (0x2E24, 0x2E24, 22),
    (0x2E25, 0x2E25, 18),
    (0x2E26, 0x2E26, 22),
    (0x2E27, 0x2E27, 18),
    (0x2E28, 0x2E28, 22),
    (0x2E29, 0x2E29, 18),
    (0x2E2A, 0x2E2E, 21),
    (0x2E2F, 0x2E2F, 6),
    (0x2E30, 0x2E39, 21),
    (0x2E3A, 0x2E3B, 17),
    (0x2E3C, 0x2E3F, 21),
    (0x2E40, 0x2E40, 17),
    (0x2E41, 0x2E41, 21),
    (0x2E42, 0x2E42, 22),
    (0x2E43, 0x2E4F, 21),
    (0x2E50, 0x2E51, 26),
    (0x2E52, 0x2E54, 21),
    (0x2E55, 0x2E55, 22),
    (0x2E56, 0x2E56, 18),
    (0x2E57, 0x2E57, 22),
    (0x2E58, 0x2E58, 18),
    (0x2E59, 0x2E59, 22),
    (0x2E5A, 0x2E5A, 18),
    (0x2E5B, 0x2E5B, 22),
    (0x2E5C, 0x2E5C, 18),
    (0x2E5D, 0x2E5D, 17),
    (0x2E80, 0x2E99, 26),
    (0x2E9B, 0x2EF3, 26),
    (0x2F00, 0x2FD5, 26),
    (0x2FF0, 0x2FFF, 26),
    (0x3000, 0x3000, 29),
    (0x3001, 0x3003, 21),
    (0x3004, 0x3004, 26),
    (0x3005, 0x3005, 6),
    (0x3006, 0x3006, 7),
    (0x3007, 0x3007, 14),
    (0x3008, 0x3008, 22),
    (0x3009, 0x3009, 18),
    (0x300A, 0x300A, 22),
    (0x300B, 0x300B, 18),
    (0x300C, 0x300C, 22),
    (0x300D, 0x300D, 18),
    (0x300E, 0x300E, 22),
    (0x300F, 0x300F, 18),
    (0x3010, 0x3010, 22),
    (0x3011, 0x3011, 18),
    (0x3012, 0x3013, 26),
    (0x3014, 0x3014, 22),
    (0x3015, 0x3015, 18),
    (0x3016, 0x3016, 22),
    (0x3017, 0x3017, 18),
    (0x3018, 0x3018, 22),
    (0x3019, 0x3019, 18),
    (0x301A, 0x301A, 22),
    (0x301B, 0x301B, 18),
    (0x301C, 0x301C, 17),
    (0x301D, 0x301D, 22),
    (0x301E, 0x301F, 18),
    (0x3020, 0x3020, 26),
    (0x3021, 0x3029, 14),
    (0x302A, 0x302D, 12),
    (0x302E, 0x302F, 10),
    (0x3030, 0x3030, 17),
    (0x3031, 0x3035, 6),
    (0x3036, 0x3037, 26),
    (0x3038, 0x303A, 14),
    (0x303B, 0x303B, 6),
    (0x303C, 0x303C, 7),
    (0x303D, 0x303D, 21),
    (0x303E, 0x303F, 26),
    (0x3041, 0x3096, 7),
    (0x3099, 0x309A, 12),
    (0x309B, 0x309C, 24),
    (0x309D, 0x309E, 6),
    (0x309F, 0x309F, 7),
    (0x30A0, 0x30A0, 17),
    (0x30A1, 0x30FA, 7),
    (0x30FB, 0x30FB, 21),
    (0x30FC, 0x30FE, 6),
    (0x30FF, 0x30FF, 7),
    (0x3105, 0x312F, 7),
    (0x3131, 0x318E, 7),
    (0x3190, 0x3191, 26),
    (0x3192, 0x3195, 15),
    (0x3196, 0x319F, 26),
    (0x31A0, 0x31BF, 7),
    (0x31C0, 0x31E3, 26),
    (0x31EF, 0x31EF, 26),
    (0x31F0, 0x31FF, 7),
    (0x3200, 0x321E, 26),
    (0x3220, 0x3229, 15),
    (0x322A, 0x3247, 26),
    (0x3248, 0x324F, 15),
    (0x3250, 0x3250, 26),
    (0x3251, 0x325F, 15),
    (0x3260, 0x327F, 26),
    (0x3280, 0x3289, 15),
    (0x328A, 0x32B0, 26),
    (0x32B1, 0x32BF, 15),
    (0x32C0, 0x33FF, 26),
    (0x3400, 0x4DBF, 7),
    (0x4DC0, 0x4DFF, 26),
    (0x4E00, 0xA014, 7),
    (0xA015, 0xA015, 6),
    (0xA016, 0xA48C, 7),
    (0xA490, 0xA4C6, 26),
    (0xA4D0, 0xA4F7, 7),
    (0xA4F8, 0xA4FD, 6),
    (0xA4FE, 0xA4FF, 21),
    (0xA500, 0xA60B, 7),
    (0xA60C, 0xA60C, 6),
    (0xA60D, 0xA60F, 21),
    (0xA610, 0xA61F, 7),
    (0xA620, 0xA629, 13),
    (0xA62A, 0xA62B, 7),
    (0xA640, 0xA640, 9),
    (0xA641, 0xA641, 5),
    (0xA642, 0xA642, 9),
    (0xA643, 0xA643, 5),
    (0xA644, 0xA644, 9),
    (0xA645, 0xA645, 5),
    (0xA646, 0xA646, 9),
    (0xA647, 0xA647, 5),
    (0xA648, 0xA648, 9),
    (0xA649, 0xA649, 5),
    (0xA64A, 0xA64A, 9),
    (0xA64B, 0xA64B, 5),
    (0xA64C, 0xA64C, 9),
    (0xA64D, 0xA64D, 5),
    (0xA64E, 0xA64E, 9),
    (0xA64F, 0xA64F, 5),
    (0xA650, 0xA650, 9),
    (0xA651, 0xA651, 5),
    (0xA652, 0xA652, 9),
    (0xA653, 0xA653, 5),
    (0xA654, 0xA654, 9),
    (0xA655, 0xA655, 5),
    (0xA656, 0xA656, 9),
    (0xA657, 0xA657, 5),
    (0xA658, 0xA658, 9),
    (0xA659, 0xA659, 5),
    (0xA65A, 0xA65A, 9),
    (0xA65B, 0xA65B, 5),
    (0xA65C, 0xA65C, 9),
    (0xA65D, 0xA65D, 5),
    (0xA65E, 0xA65E, 9),
    (0xA65F, 0xA65F, 5),
    (0xA660, 0xA660, 9),
    (0xA661, 0xA661, 5),
    (0xA662, 0xA662, 9),
    (0xA663, 0xA663, 5),
    (0xA664, 0xA664, 9),
    (0xA665, 0xA665, 5),
    (0xA666, 0xA666, 9),
    (0xA667, 0xA667, 5),
    (0xA668, 0xA668, 9),
    (0xA669, 0xA669, 5),
    (0xA66A, 0xA66A, 9),
    (0xA66B, 0xA66B, 5),
    (0xA66C, 0xA66C, 9),
    (0xA66D, 0xA66D, 5),
    (0xA66E, 0xA66E, 7),
    (0xA66F, 0xA66F, 12),
    (0xA670, 0xA672, 11),
    (0xA673, 0xA673, 21),
    (0xA674, 0xA67D, 12),
    (0xA67E, 0xA67E, 21),
    (0xA67F, 0xA67F, 6),
    (0xA680, 0xA680, 9),
    (0xA681, 0xA681, 5),
    (0xA682, 0xA682, 9),
    (0xA683, 0xA683, 5),
    (0xA684, 0xA684, 9),
    (0xA685, 0xA685, 5),
    (0xA686, 0xA686, 9),
    (0xA687, 0xA687, 5),
    (0xA688, 0xA688, 9),
    (0xA689, 0xA689, 5),
    (0xA68A, 0xA68A, 9),
    (0xA68B, 0xA68B, 5),
    (0xA68C, 0xA68C, 9),
    (0xA68D, 0xA68D, 5),
    (0xA68E, 0xA68E, 9),
    (0xA68F, 0xA68F, 5),
    (0xA690, 0xA690, 9),
    (0xA691, 0xA691, 5),
    (0xA692, 0xA692, 9),
    (0xA693, 0xA693, 5),
    (0xA694, 0xA694, 9),
    (0xA695, 0xA695, 5),
    (0xA696, 0xA696, 9),
    (0xA697, 0xA697, 5),
    (0xA698, 0xA698, 9),
    (0xA699, 0xA699, 5),
    (0xA69A, 0xA69A, 9),
    (0xA69B, 0xA69B, 5),
    (0xA69C, 0xA69D, 6),
    (0xA69E, 0xA69F, 12),
    (0xA6A0, 0xA6E5, 7),
    (0xA6E6, 0xA6EF, 14),
    (0xA6F0, 0xA6F1, 12),
    (0xA6F2, 0xA6F7, 21),
    (0xA700, 0xA716, 24),
    (0xA717, 0xA71F, 6),
    (0xA720, 0xA721, 24),
    (0xA722, 0xA722, 9),
    (0xA723, 0xA723, 5),
    (0xA724, 0xA724, 9),
    (0xA725, 0xA725, 5),
    (0xA726, 0xA726, 9),
    (0xA727, 0xA727, 5),
    (0xA728, 0xA728, 9),
    (0xA729, 0xA729, 5),
    (0xA72A, 0xA72A, 9),
    (0xA72B, 0xA72B, 5),
    (0xA72C, 0xA72C, 9),
    (0xA72D, 0xA72D, 5),
    (0xA72E, 0xA72E, 9),
    (0xA72F, 0xA731, 5),
    (0xA732, 0xA732, 9),
    (0xA733, 0xA733, 5),
    (0xA734, 0xA734, 9),
    (0xA735, 0xA735, 5),
    (0xA736, 0xA736, 9),
    (0xA737, 0xA737, 5),
    (0xA738, 0xA738, 9),
    (0xA739, 0xA739, 5),
    (0xA73A, 0xA73A, 9),
    (0xA73B, 0xA73B, 5),
    (0xA73C, 0xA73C, 9),
    (0xA73D, 0xA73D, 5),
    (0xA73E, 0xA73E, 9),
    (0xA73F, 0xA73F, 5),
    (0xA740, 0xA740, 9),
    (0xA741, 0xA741, 5),
    (0xA742, 0xA742, 9),
    (0xA743, 0xA743, 5),
    (0xA744, 0xA744, 9),
    (0xA745, 0xA745, 5),
    (0xA746, 0xA746, 9),
    (0xA747, 0xA747, 5),
    (0xA748, 0xA748, 9),
    (0xA749, 0xA749, 5),
    (0xA74A, 0xA74A, 9),
    (0xA74B, 0xA74B, 5),
    (0xA74C, 0xA74C, 9),
    (0xA74D, 0xA74D, 5),
    (0xA74E, 0xA74E, 9),
    (0xA74F, 0xA74F, 5),
    (0xA750, 0xA750, 9),
    (0xA751, 0xA751, 5),
    (0xA752, 0xA752, 9),
    (0xA753, 0xA753, 5),
    (0xA754, 0xA754, 9),
    (0xA755, 0xA755, 5),
    (0xA756, 0xA756, 9),
    (0xA757, 0xA757, 5),
    (0xA758, 0xA758, 9),
    (0xA759, 0xA759, 5),
    (0xA75A, 0xA75A, 9),
    (0xA75B, 0xA75B, 5),
    (0xA75C, 0xA75C, 9),
    (0xA75D, 0xA75D, 5),
    (0xA75E, 0xA75E, 9),
    (0xA75F, 0xA75F, 5),
    (0xA760, 0xA760, 9),
    (0xA761, 0xA761, 5),
    (0xA762, 0xA762, 9),
    (0xA763, 0xA763, 5),
    (0xA764, 0xA764, 9),
    (0xA765, 0xA765, 5),
    (0xA766, 0xA766, 9),
    (0xA767, 0xA767, 5),
    (0xA768, 0xA768, 9),
    (0xA769, 0xA769, 5),
    (0xA76A, 0xA76A, 9),
    (0xA76B, 0xA76B, 5),
    (0xA76C, 0xA76C, 9),
    (0xA76D, 0xA76D, 5),
    (0xA76E, 0xA76E, 9),
    (0xA76F, 0xA76F, 5),
    (0xA770, 0xA770, 6),
    (0xA771, 0xA778, 5),
    (0xA779, 0xA779, 9),
    (0xA77A, 0xA77A, 5),
    (0xA77B, 0xA77B, 9),
    (0xA77C, 0xA77C, 5),
    (0xA77D, 0xA77E, 9),
    (0xA77F, 0xA77F, 5),
    (0xA780, 0xA780, 9),
    (0xA781, 0xA781, 5),
    (0xA782, 0xA782, 9),
    (0xA783, 0xA783, 5),
    (0xA784, 0xA784, 9),
    (0xA785, 0xA785, 5),
    (0xA786, 0xA786, 9),
    (0xA787, 0xA787, 5),
    (0xA788, 0xA788, 6),
    (0xA789, 0xA78A, 24),
    (0xA78B, 0xA78B, 9),
    (0xA78C, 0xA78C, 5),
    (0xA78D, 0xA78D, 9),
    (0xA78E, 0xA78E, 5),
    (0xA78F, 0xA78F, 7),
    (0xA790, 0xA790, 9),
    (0xA791, 0xA791, 5),
    (0xA792, 0xA792, 9),
    (0xA793, 0xA795, 5),
    (0xA796, 0xA796, 9),
    (0xA797, 0xA797, 5),
    (0xA798, 0xA798, 9),
    (0xA799, 0xA799, 5),
    (0xA79A, 0xA79A, 9),
    (0xA79B, 0xA79B, 5),
    (0xA79C, 0xA79C, 9),
    (0xA79D, 0xA79D, 5),
    (0xA79E, 0xA79E, 9),
    (0xA79F, 0xA79F, 5),
    (0xA7A0, 0xA7A0, 9),
    (0xA7A1, 0xA7A1, 5),
    (0xA7A2, 0xA7A2, 9),
    (0xA7A3, 0xA7A3, 5),
    (0xA7A4, 0xA7A4, 9),
    (0xA7A5, 0xA7A5, 5),
    (0xA7A6, 0xA7A6, 9),
    (0xA7A7, 0xA7A7, 5),
    (0xA7A8, 0xA7A8, 9),
    (0xA7A9, 0xA7A9, 5),
    (0xA7AA, 0xA7AE, 9),
    (0xA7AF, 0xA7AF, 5),
    (0xA7B0, 0xA7B4, 9),
    (0xA7B5, 0xA7B5, 5),
    (0xA7B6, 0xA7B6, 9),
    (0xA7B7, 0xA7B7, 5),
    (0xA7B8, 0xA7B8, 9),
    (0xA7B9, 0xA7B9, 5),
    (0xA7BA, 0xA7BA, 9),
    (0xA7BB, 0xA7BB, 5),
    (0xA7BC, 0xA7BC, 9),
    (0xA7BD, 0xA7BD, 5),
    (0xA7BE, 0xA7BE, 9),
    (0xA7BF, 0xA7BF, 5),
    (0xA7C0, 0xA7C0, 9),
    (0xA7C1, 0xA7C1, 5),
    (0xA7C2, 0xA7C2, 9),
    (0xA7C3, 0xA7C3, 5),
    (0xA7C4, 0xA7C7, 9),
    (0xA7C8, 0xA7C8, 5),
    (0xA7C9, 0xA7C9, 9),
    (0xA7CA, 0xA7CA, 5),
    (0xA7D0, 0xA7D0, 9),
    (0xA7D1, 0xA7D1, 5),
    (0xA7D3, 0xA7D3, 5),
    (0xA7D5, 0xA7D5, 5),
    (0xA7D6, 0xA7D6, 9),
    (0xA7D7, 0xA7D7, 5),
    (0xA7D8, 0xA7D8, 9),
    (0xA7D9, 0xA7D9, 5),
    (0xA7F2, 0xA7F4, 6),
    (0xA7F5, 0xA7F5, 9),
    (0xA7F6, 0xA7F6, 5),
    (0xA7F7, 0xA7F7, 7),
    (0xA7F8, 0xA7F9, 6),
    (0xA7FA, 0xA7FA, 5),
    (0xA7FB, 0xA801, 7),
    (0xA802, 0xA802, 12),
    (0xA803, 0xA805, 7),
    (0xA806, 0xA806, 12),
    (0xA807, 0xA80A, 7),
    (0xA80B, 0xA80B, 12),
    (0xA80C, 0xA822, 7),
    (0xA823, 0xA824, 10),
    (0xA825, 0xA826, 12),
    (0xA827, 0xA827, 10),
    (0xA828, 0xA82B, 26),
    (0xA82C, 0xA82C, 12),
    (0xA830, 0xA835, 15),
    (0xA836, 0xA837, 26),
    (0xA838, 0xA838, 23),
    (0xA839, 0xA839, 26),
    (0xA840, 0xA873, 7),
    (0xA874, 0xA877, 21),
    (0xA880, 0xA881, 10),
    (0xA882, 0xA8B3, 7),
    (0xA8B4, 0xA8C3, 10),
    (0xA8C4, 0xA8C5, 12),
    (0xA8CE, 0xA8CF, 21),
    (0xA8D0, 0xA8D9, 13),
    (0xA8E0, 0xA8F1, 12),
    (0xA8F2, 0xA8F7, 7),
    (0xA8F8, 0xA8FA, 21),
    (0xA8FB, 0xA8FB, 7),
    (0xA8FC, 0xA8FC, 21),
    (0xA8FD, 0xA8FE, 7),
    (0xA8FF, 0xA8FF, 12),
    (0xA900, 0xA909, 13),
    (0xA90A, 0xA925, 7),
    (0xA926, 0xA92D, 12),
    (0xA92E, 0xA92F, 21),
    (0xA930, 0xA946, 7),
    (0xA947, 0xA951, 12),
    (0xA952, 0xA953, 10),
    (0xA95F, 0xA95F, 21),
    (0xA960, 0xA97C, 7),
    (0xA980, 0xA982, 12),
    (0xA983, 0xA983, 10),
    (0xA984, 0xA9B2, 7),
    (0xA9B3, 0xA9B3, 12),
    (0xA9B4, 0xA9B5, 10),
    (0xA9B6, 0xA9B9, 12),
    (0xA9BA, 0xA9BB, 10),
    (0xA9BC, 0xA9BD, 12),
    (0xA9BE, 0xA9C0, 10),
    (0xA9C1, 0xA9CD, 21),
    (0xA9CF, 0xA9CF, 6),
    (0xA9D0, 0xA9D9, 13),
    (0xA9DE, 0xA9DF, 21),
    (0xA9E0, 0xA9E4, 7),
    (0xA9E5, 0xA9E5, 12),
    (0xA9E6, 0xA9E6, 6),
    (0xA9E7, 0xA9EF, 7),
    (0xA9F0, 0xA9F9, 13),
    (0xA9FA, 0xA9FE, 7),
    (0xAA00, 0xAA28, 7),
    (0xAA29, 0xAA2E, 12),
    (0xAA2F, 0xAA30, 10),
    (0xAA31, 0xAA32, 12),
    (0xAA33, 0xAA34, 10),
    (0xAA35, 0xAA36, 12),
    (0xAA40, 0xAA42, 7),
    (0xAA43, 0xAA43, 12),
    (0xAA44, 0xAA4B, 7),
    (0xAA4C, 0xAA4C, 12),
    (0xAA4D, 0xAA4D, 10),
    (0xAA50, 0xAA59, 13),
    (0xAA5C, 0xAA5F, 21),
    (0xAA60, 0xAA6F, 7),
    (0xAA70, 0xAA70, 6),
    (0xAA71, 0xAA76, 7),
    (0xAA77, 0xAA79, 26),
    (0xAA7A, 0xAA7A, 7),
    (0xAA7B, 0xAA7B, 10),
    (0xAA7C, 0xAA7C, 12),
    (0xAA7D, 0xAA7D, 10),
    (0xAA7E, 0xAAAF, 7),
    (0xAAB0, 0xAAB0, 12),
    (0xAAB1, 0xAAB1, 7),
    (0xAAB2, 0xAAB4, 12),
    (0xAAB5, 0xAAB6, 7),
    (0xAAB7, 0xAAB8, 12),
    (0xAAB9, 0xAABD, 7),
    (0xAABE, 0xAABF, 12),
    (0xAAC0, 0xAAC0, 7),
    (0xAAC1, 0xAAC1, 12),
    (0xAAC2, 0xAAC2, 7),
    (0xAADB, 0xAADC, 7),
    (0xAADD, 0xAADD, 6),
    (0xAADE, 0xAADF, 21),
    (0xAAE0, 0xAAEA, 7),
    (0xAAEB, 0xAAEB, 10),
    (0xAAEC, 0xAAED, 12),
    (0xAAEE, 0xAAEF, 10),
    (0xAAF0, 0xAAF1, 21),
    (0xAAF2, 0xAAF2, 7),
    (0xAAF3, 0xAAF4, 6),
    (0xAAF5, 0xAAF5, 10),
    (0xAAF6, 0xAAF6, 12),
    (0xAB01, 0xAB06, 7),
    (0xAB09, 0xAB0E, 7),
    (0xAB11, 0xAB16, 7),
    (0xAB20, 0xAB26, 7),
    (0xAB28, 0xAB2E, 7),
    (0xAB30, 0xAB5A, 5),
    (0xAB5B, 0xAB5B, 24),
    (0xAB5C, 0xAB5F, 6),
    (0xAB60, 0xAB68, 5),
    (0xAB69, 0xAB69, 6),
    (0xAB6A, 0xAB6B, 24),
    (0xAB70, 0xABBF, 5),
    (0xABC0, 0xABE2, 7),
    (0xABE3, 0xABE4, 10),
    (0xABE5, 0xABE5, 12),
    (0xABE6, 0xABE7, 10),
    (0xABE8, 0xABE8, 12),
    (0xABE9, 0xABEA, 10),
    (0xABEB, 0xABEB, 21),
    (0xABEC, 0xABEC, 10),
    (0xABED, 0xABED, 12),
    (0xABF0, 0xABF9, 13),
    (0xAC00, 0xD7A3, 7),
    (0xD7B0, 0xD7C6, 7),
    (0xD7CB, 0xD7FB, 7),
    (0xD800, 0xDFFF, 4),
    (0xE000, 0xF8FF, 3),
    (0xF900, 0xFA6D, 7),
    (0xFA70, 0xFAD9, 7),
    (0xFB00, 0xFB06, 5),
    (0xFB13, 0xFB17, 5),
    (0xFB1D, 0xFB1D, 7),
    (0xFB1E, 0xFB1E, 12),
    (0xFB1F, 0xFB28, 7),
    (0xFB29, 0xFB29, 25),
    (0xFB2A, 0xFB36, 7),
    (0xFB38, 0xFB3C, 7),
    (0xFB3E, 0xFB3E, 7),
    (0xFB40, 0xFB41, 7),
    (0xFB43, 0xFB44, 7),
    (0xFB46, 0xFBB1, 7),
    (0xFBB2, 0xFBC2, 24),
    (0xFBD3, 0xFD3D, 7),
    (0xFD3E, 0xFD3E, 18),
    (0xFD3F, 0xFD3F, 22),
    (0xFD40, 0xFD4F, 26),
    (0xFD50, 0xFD8F, 7),
    (0xFD92, 0xFDC7, 7),
    (0xFDCF, 0xFDCF, 26),
    (0xFDF0, 0xFDFB, 7),
    (0xFDFC, 0xFDFC, 23),
    (0xFDFD, 0xFDFF, 26),
    (0xFE00, 0xFE0F, 12),
    (0xFE10, 0xFE16, 21),
    (0xFE17, 0xFE17, 22),
    (0xFE18, 0xFE18, 18),
    (0xFE19, 0xFE19, 21),
    (0xFE20, 0xFE2F, 12),
    (0xFE30, 0xFE30, 21),
    (0xFE31, 0xFE32, 17),
    (0xFE33, 0xFE34, 16),
    (0xFE35, 0xFE35, 22),
    (0xFE36, 0xFE36, 18),
    (0xFE37, 0xFE37, 22),
    (0xFE38, 0xFE38, 18),
    (0xFE39, 0xFE39, 22),
    (0xFE3A, 0xFE3A, 18),
    (0xFE3B, 0xFE3B, 22),
    (0xFE3C, 0xFE3C, 18),
    (0xFE3D, 0xFE3D, 22),
    (0xFE3E, 0xFE3E, 18),
    (0xFE3F, 0xFE3F, 22),
    (0xFE40, 0xFE40, 18),
    (0xFE41, 0xFE41, 22),
    (0xFE42, 0xFE42, 18),
    (0xFE43, 0xFE43, 22),
    (0xFE44, 0xFE44, 18),
    (0xFE45, 0xFE46, 21),
    (0xFE47, 0xFE47, 22),
    (0xFE48, 0xFE48, 18),
    (0xFE49, 0xFE4C, 21),
    (0xFE4D, 0xFE4F, 16),
    (0xFE50, 0xFE52, 21),
    (0xFE54, 0xFE57, 21),
    (0xFE58, 0xFE58, 17),
    (0xFE59, 0xFE59, 22),
    (0xFE5A, 0xFE5A, 18),
    (0xFE5B, 0xFE5B, 22),
    (0xFE5C, 0xFE5C, 18),
    (0xFE5D, 0xFE5D, 22),
    (0xFE5E, 0xFE5E, 18),
    (0xFE5F, 0xFE61, 21),
    (0xFE62, 0xFE62, 25),
    (0xFE63, 0xFE63, 17),
    (0xFE64, 0xFE66, 25),
    (0xFE68, 0xFE68, 21),
    (0xFE69, 0xFE69, 23),
    (0xFE6A, 0xFE6B, 21),
    (0xFE70, 0xFE74, 7),
    (0xFE76, 0xFEFC, 7),
    (0xFEFF, 0xFEFF, 1),
    (0xFF01, 0xFF03, 21),
    (0xFF04, 0xFF04, 23),
    (0xFF05, 0xFF07, 21),
    (0xFF08, 0xFF08, 22),
    (0xFF09, 0xFF09, 18),
    (0xFF0A, 0xFF0A, 21),
    (0xFF0B, 0xFF0B, 25),
    (0xFF0C, 0xFF0C, 21),
    (0xFF0D, 0xFF0D, 17),
    (0xFF0E, 0xFF0F, 21),
    (0xFF10, 0xFF19, 13),
    (0xFF1A, 0xFF1B, 21),
    (0xFF1C, 0xFF1E, 25),
    (0xFF1F, 0xFF20, 21),
    (0xFF21, 0xFF3A, 9),
    (0xFF3B, 0xFF3B, 22),
    (0xFF3C, 0xFF3C, 21),
    (0xFF3D, 0xFF3D, 18),
    (0xFF3E, 0xFF3E, 24),
    (0xFF3F, 0xFF3F, 16),
    (0xFF40, 0xFF40, 24),
    (0xFF41, 0xFF5A, 5),
    (0xFF5B, 0xFF5B, 22),
    (0xFF5C, 0xFF5C, 25),
    (0xFF5D, 0xFF5D, 18),
    (0xFF5E, 0xFF5E, 25),
    (0xFF5F, 0xFF5F, 22),
    (0xFF60, 0xFF60, 18),
    (0xFF61, 0xFF61, 21),
    (0xFF62, 0xFF62, 22),
    (0xFF63, 0xFF63, 18),
    (0xFF64, 0xFF65, 21),
    (0xFF66, 0xFF6F, 7),
    (0xFF70, 0xFF70, 6),
    (0xFF71, 0xFF9D, 7),
    (0xFF9E, 0xFF9F, 6),
    (0xFFA0, 0xFFBE, 7),
    (0xFFC2, 0xFFC7, 7),
    (0xFFCA, 0xFFCF, 7),
    (0xFFD2, 0xFFD7, 7),
    (0xFFDA, 0xFFDC, 7),
    (0xFFE0, 0xFFE1, 23),
    (0xFFE2, 0xFFE2, 25),
    (0xFFE3, 0xFFE3, 24),
    (0xFFE4, 0xFFE4, 26),
    (0xFFE5, 0xFFE6, 23),
    (0xFFE8, 0xFFE8, 26),
    (0xFFE9, 0xFFEC, 25),
    (0xFFED, 0xFFEE, 26),
    (0xFFF9, 0xFFFB, 1),
    (0xFFFC, 0xFFFD, 26),
    (0x10000, 0x1000B, 7),
    (0x1000D, 0x10026, 7),
    (0x10028, 0x1003A, 7),
    (0x1003C, 0x1003D, 7),
    (0x1003F, 0x1004D, 7),
    (0x10050, 0x1005D, 7),
    (0x10080, 0x100FA, 7),
    (0x10100, 0x10102, 21),
    (0x10107, 0x10133, 15),
    (0x10137, 0x1013F, 26),
    (0x10140, 0x10174, 14),
    (0x10175, 0x10178, 15),
    (0x10179, 0x10189, 26),
    (0x1018A, 0x1018B, 15),
    (0x1018C, 0x1018E, 26),
    (0x10190, 0x1019C, 26),
    (0x101A0, 0x101A0, 26),
    (0x101D0, 0x101FC, 26),
    (0x101FD, 0x101FD, 12),
    (0x10280, 0x1029C, 7),
    (0x102A0, 0x102D0, 7),
    (0x102E0, 0x102E0, 12),
    (0x102E1, 0x102FB, 15),
    (0x10300, 0x1031F, 7),
    (0x10320, 0x10323, 15),
    (0x1032D, 0x10340, 7),
    (0x10341, 0x10341, 14),
    (0x10342, 0x10349, 7),
    (0x1034A, 0x1034A, 14),
    (0x10350, 0x10375, 7),
    (0x10376, 0x1037A, 12),
    (0x10380, 0x1039D, 7),
    (0x1039F, 0x1039F, 21),
    (0x103A0, 0x103C3, 7),
    (0x103C8, 0x103CF, 7),
    (0x103D0, 0x103D0, 21),
    (0x103D1, 0x103D5, 14),
    (0x10400, 0x10427, 9),
    (0x10428, 0x1044F, 5),
    (0x10450, 0x1049D, 7),
    (0x104A0, 0x104A9, 13),
    (0x104B0, 0x104D3, 9),
    (0x104D8, 0x104FB, 5),
    (0x10500, 0x10527, 7),
    (0x10530, 0x10563, 7),
    (0x1056F, 0x1056F, 21),
    (0x10570, 0x1057A, 9),
    (0x1057C, 0x1058A, 9),
    (0x1058C, 0x10592, 9),
    (0x10594, 0x10595, 9),
    (0x10597, 0x105A1, 5),
    (0x105A3, 0x105B1, 5),
    (0x105B3, 0x105B9, 5),
    (0x105BB, 0x105BC, 5),
    (0x10600, 0x10736, 7),
    (0x10740, 0x10755, 7),
    (0x10760, 0x10767, 7),
    (0x10780, 0x10785, 6),
    (0x10787, 0x107B0, 6),
    (0x107B2, 0x107BA, 6),
    (0x10800, 0x10805, 7),
    (0x10808, 0x10808, 7),
    (0x1080A, 0x10835, 7),
    (0x10837, 0x10838, 7),
    (0x1083C, 0x1083C, 7),
    (0x1083F, 0x10855, 7),
    (0x10857, 0x10857, 21),
    (0x10858, 0x1085F, 15),
    (0x10860, 0x10876, 7),
    (0x10877, 0x10878, 26),
    (0x10879, 0x1087F, 15),
    (0x10880, 0x1089E, 7),
    (0x108A7, 0x108AF, 15),
    (0x108E0, 0x108F2, 7),
    (0x108F4, 0x108F5, 7),
    (0x108FB, 0x108FF, 15),
    (0x10900, 0x10915, 7),
    (0x10916, 0x1091B, 15),
    (0x1091F, 0x1091F, 21),
    (0x10920, 0x10939, 7),
    (0x1093F, 0x1093F, 21),
    (0x10980, 0x109B7, 7),
    (0x109BC, 0x109BD, 15),
    (0x109BE, 0x109BF, 7),
    (0x109C0, 0x109CF, 15),
    (0x109D2, 0x109FF, 15),
    (0x10A00, 0x10A00, 7),
    (0x10A01, 0x10A03, 12),
    (0x10A05, 0x10A06, 12),
    (0x10A0C, 0x10A0F, 12),
    (0x10A10, 0x10A13, 7),
    (0x10A15, 0x10A17, 7),
    (0x10A19, 0x10A35, 7),
    (0x10A38, 0x10A3A, 12),
    (0x10A3F, 0x10A3F, 12),
    (0x10A40, 0x10A48, 15),
    (0x10A50, 0x10A58, 21),
    (0x10A60, 0x10A7C, 7),
    (0x10A7D, 0x10A7E, 15),
    (0x10A7F, 0x10A7F, 21),
    (0x10A80, 0x10A9C, 7),
    (0x10A9D, 0x10A9F, 15),
    (0x10AC0, 0x10AC7, 7),
    (0x10AC8, 0x10AC8, 26),
    (0x10AC9, 0x10AE4, 7),
    (0x10AE5, 0x10AE6, 12),
    (0x10AEB, 0x10AEF, 15),
    (0x10AF0, 0x10AF6, 21),
    (0x10B00, 0x10B35, 7),
    (0x10B39, 0x10B3F, 21),
    (0x10B40, 0x10B55, 7),
    (0x10B58, 0x10B5F, 15),
    (0x10B60, 0x10B72, 7),
    (0x10B78, 0x10B7F, 15),
    (0x10B80, 0x10B91, 7),
    (0x10B99, 0x10B9C, 21),
    (0x10BA9, 0x10BAF, 15),
    (0x10C00, 0x10C48, 7),
    (0x10C80, 0x10CB2, 9),
    (0x10CC0, 0x10CF2, 5),
    (0x10CFA, 0x10CFF, 15),
    (0x10D00, 0x10D23, 7),
    (0x10D24, 0x10D27, 12),
    (0x10D30, 0x10D39, 13),
    (0x10E60, 0x10E7E, 15),
    (0x10E80, 0x10EA9, 7),
    (0x10EAB, 0x10EAC, 12),
    (0x10EAD, 0x10EAD, 17),
    (0x10EB0, 0x10EB1, 7),
    (0x10EFD, 0x10EFF, 12),
    (0x10F00, 0x10F1C, 7),
    (0x10F1D, 0x10F26, 15),
    (0x10F27, 0x10F27, 7),
    (0x10F30, 0x10F45, 7),
    (0x10F46, 0x10F50, 12),
    (0x10F51, 0x10F54, 15),
    (0x10F55, 0x10F59, 21),
    (0x10F70, 0x10F81, 7),
    (0x10F82, 0x10F85, 12),
    (0x10F86, 0x10F89, 21),
    (0x10FB0, 0x10FC4, 7),
    (0x10FC5, 0x10FCB, 15),
    (0x10FE0, 0x10FF6, 7),
    (0x11000, 0x11000, 10),
    (0x11001, 0x11001, 12),
    (0x11002, 0x11002, 10),
    (0x11003, 0x11037, 7),
    (0x11038, 0x11046, 12),
    (0x11047, 0x1104D, 21),
    (0x11052, 0x11065, 15),
    (0x11066, 0x1106F, 13),
    (0x11070, 0x11070, 12),
    (0x11071, 0x11072, 7),
    (0x11073, 0x11074, 12),
    (0x11075, 0x11075, 7),
    (0x1107F, 0x11081, 12),
    (0x11082, 0x11082, 10),
    (0x11083, 0x110AF, 7),
    (0x110B0, 0x110B2, 10),
    (0x110B3, 0x110B6, 12),
    (0x110B7, 0x110B8, 10),
    (0x110B9, 0x110BA, 12),
    (0x110BB, 0x110BC, 21),
    (0x110BD, 0x110BD, 1),
    (0x110BE, 0x110C1, 21),
    (0x110C2, 0x110C2, 12),
    (0x110CD, 0x110CD, 1),
    (0x110D0, 0x110E8, 7),
    (0x110F0, 0x110F9, 13),
    (0x11100, 0x11102, 12),
    (0x11103, 0x11126, 7),
    (0x11127, 0x1112B, 12),
    (0x1112C, 0x1112C, 10),
    (0x1112D, 0x11134, 12),
    (0x11136, 0x1113F, 13),
    (0x11140, 0x11143, 21),
    (0x11144, 0x11144, 7),
    (0x11145, 0x11146, 10),
    (0x11147, 0x11147, 7),
    (0x11150, 0x11172, 7),
    (0x11173, 0x11173, 12),
    (0x11174, 0x11175, 21),
    (0x11176, 0x11176, 7),
    (0x11180, 0x11181, 12),
    (0x11182, 0x11182, 10),
    (0x11183, 0x111B2, 7),
    (0x111B3, 0x111B5, 10),
    (0x111B6, 0x111BE, 12),
    (0x111BF, 0x111C0, 10),
    (0x111C1, 0x111C4, 7),
    (0x111C5, 0x111C8, 21),
    (0x111C9, 0x111CC, 12),
    (0x111CD, 0x111CD, 21),
    (0x111CE, 0x111CE, 10),
    (0x111CF, 0x111CF, 12),
    (0x111D0, 0x111D9, 13),
    (0x111DA, 0x111DA, 7),
    (0x111DB, 0x111DB, 21),
    (0x111DC, 0x111DC, 7),
    (0x111DD, 0x111DF, 21),
    (0x111E1, 0x111F4, 15),
    (0x11200, 0x11211, 7),
    (0x11213, 0x1122B, 7),
    (0x1122C, 0x1122E, 10),
    (0x1122F, 0x11231, 12),
    (0x11232, 0x11233, 10),
    (0x11234, 0x11234, 12),
    (0x11235, 0x11235, 10),
    (0x11236, 0x11237, 12),
    (0x11238, 0x1123D, 21),
    (0x1123E, 0x1123E, 12),
    (0x1123F, 0x11240, 7),
    (0x11241, 0x11241, 12),
    (0x11280, 0x11286, 7),
    (0x11288, 0x11288, 7),
    (0x1128A, 0x1128D, 7),
    (0x1128F, 0x1129D, 7),
    (0x1129F, 0x112A8, 7),
    (0x112A9, 0x112A9, 21),
    (0x112B0, 0x112DE, 7),
    (0x112DF, 0x112DF, 12),
    (0x112E0, 0x112E2, 10),
    (0x112E3, 0x112EA, 12),
    (0x112F0, 0x112F9, 13),
    (0x11300, 0x11301, 12),
    (0x11302, 0x11303, 10),
    (0x11305, 0x1130C, 7),
    (0x1130F, 0x11310, 7),
    (0x11313, 0x11328, 7),
    (0x1132A, 0x11330, 7),
    (0x11332, 0x11333, 7),
    (0x11335, 0x11339, 7),
    (0x1133B, 0x1133C, 12),
    (0x1133D, 0x1133D, 7),
    (0x1133E, 0x1133F, 10),
    (0x11340, 0x11340, 12),
    (0x11341, 0x11344, 10),
    (0x11347, 0x11348, 10),
    (0x1134B, 0x1134D, 10),
    (0x11350, 0x11350, 7),
    (0x11357, 0x11357, 10),
    (0x1135D, 0x11361, 7),
    (0x11362, 0x11363, 10),
    (0x11366, 0x1136C, 12),
    (0x11370, 0x11374, 12),
    (0x11400, 0x11434, 7),
    (0x11435, 0x11437, 10),
    (0x11438, 0x1143F, 12),
    (0x11440, 0x11441, 10),
    (0x11442, 0x11444, 12),
    (0x11445, 0x11445, 10),
    (0x11446, 0x11446, 12),
    (0x11447, 0x1144A, 7),
    (0x1144B, 0x1144F, 21),
    (0x11450, 0x11459, 13),
    (0x1145A, 0x1145B, 21),
    (0x1145D, 0x1145D, 21),
    (0x1145E, 0x1145E, 12),
    (0x1145F, 0x11461, 7),
    (0x11480, 0x114AF, 7),
    (0x114B0, 0x114B2, 10),
    (0x114B3, 0x114B8, 12),
    (0x114B9, 0x114B9, 10),
    (0x114BA, 0x114BA, 12),
    (0x114BB, 0x114BE, 10),
    (0x114BF, 0x114C0, 12),
    (0x114C1, 0x114C1, 10),
    (0x114C2, 0x114C3, 12),
    (0x114C4, 0x114C5, 7),
    (0x114C6, 0x114C6, 21),
    (0x114C7, 0x114C7, 7),
    (0x114D0, 0x114D9, 13),
    (0x11580, 0x115AE, 7),
    (0x115AF, 0x115B1, 10),
    (0x115B2, 0x115B5, 12),
    (0x115B8, 0x115BB, 10),
    (0x115BC, 0x115BD, 12),
    (0x115BE, 0x115BE, 10),
    (0x115BF, 0x115C0, 12),
    (0x115C1, 0x115D7, 21),
    (0x115D8, 0x115DB, 7),
    (0x115DC, 0x115DD, 12),
    (0x11600, 0x1162F, 7),
    (0x11630, 0x11632, 10),
    (0x11633, 0x1163A, 12),
    (0x1163B, 0x1163C, 10),
    (0x1163D, 0x1163D, 12),
    (0x1163E, 0x1163E, 10),
    (0x1163F, 0x11640, 12),
    (0x11641, 0x11643, 21),
    (0x11644, 0x11644, 7),
    (0x11650, 0x11659, 13),
    (0x11660, 0x1166C, 21),
    (0x11680, 0x116AA, 7),
    (0x116AB, 0x116AB, 12),
    (0x116AC, 0x116AC, 10),
    (0x116AD, 0x116AD, 12),
    (0x116AE, 0x116AF, 10),
    (0x116B0, 0x116B5, 12),
    (0x116B6, 0x116B6, 10),
    (0x116B7, 0x116B7, 12),
    (0x116B8, 0x116B8, 7),
    (0x116B9, 0x116B9, 21),
    (0x116C0, 0x116C9, 13),
    (0x11700, 0x1171A, 7),
    (0x1171D, 0x1171F, 12),
    (0x11720, 0x11721, 10),
    (0x11722, 0x11725, 12),
    (0x11726, 0x11726, 10),
    (0x11727, 0x1172B, 12),
    (0x11730, 0x11739, 13),
    (0x1173A, 0x1173B, 15),
    (0x1173C, 0x1173E, 21),
    (0x1173F, 0x1173F, 26),
    (0x11740, 0x11746, 7),
    (0x11800, 0x1182B, 7),
    (0x1182C, 0x1182E, 10),
    (0x1182F, 0x11837, 12),
    (0x11838, 0x11838, 10),
    (0x11839, 0x1183A, 12),
    (0x1183B, 0x1183B, 21),
    (0x118A0, 0x118BF, 9),
    (0x118C0, 0x118DF, 5),
    (0x118E0, 0x118E9, 13),
    (0x118EA, 0x118F2, 15),
    (0x118FF, 0x11906, 7),
    (0x11909, 0x11909, 7),
    (0x1190C, 0x11913, 7),
    (0x11915, 0x11916, 7),
    (0x11918, 0x1192F, 7),
    (0x11930, 0x11935, 10),
    (0x11937, 0x11938, 10),
    (0x1193B, 0x1193C, 12),
    (0x1193D, 0x1193D, 10),
    (0x1193E, 0x1193E, 12),
    (0x1193F, 0x1193F, 7),
    (0x11940, 0x11940, 10),
    (0x11941, 0x11941, 7),
    (0x11942, 0x11942, 10),
    (0x11943, 0x11943, 12),
    (0x11944, 0x11946, 21),
    (0x11950, 0x11959, 13),
    (0x119A0, 0x119A7, 7),
    (0x119AA, 0x119D0, 7),
    (0x119D1, 0x119D3, 10),
    (0x119D4, 0x119D7, 12),
    (0x119DA, 0x119DB, 12),
    (0x119DC, 0x119DF, 10),
    (0x119E0, 0x119E0, 12),
    (0x119E1, 0x119E1, 7),
    (0x119E2, 0x119E2, 21),
    (0x119E3, 0x119E3, 7),
    (0x119E4, 0x119E4, 10),
    (0x11A00, 0x11A00, 7),
    (0x11A01, 0x11A0A, 12),
    (0x11A0B, 0x11A32, 7),
    (0x11A33, 0x11A38, 12),
    (0x11A39, 0x11A39, 10),
    (0x11A3A, 0x11A3A, 7),
    (0x11A3B, 0x11A3E, 12),
    (0x11A3F, 0x11A46, 21),
    (0x11A47, 0x11A47, 12),
    (0x11A50, 0x11A50, 7),
    (0x11A51, 0x11A56, 12),
    (0x11A57, 0x11A58, 10),
    (0x11A59, 0x11A5B, 12),
    (0x11A5C, 0x11A89, 7),
    (0x11A8A, 0x11A96, 12),
    (0x11A97, 0x11A97, 10),
    (0x11A98, 0x11A99, 12),
    (0x11A9A, 0x11A9C, 21),
    (0x11A9D, 0x11A9D, 7),
    (0x11A9E, 0x11AA2, 21),
    (0x11AB0, 0x11AF8, 7),
    (0x11B00, 0x11B09, 21),
    (0x11C00, 0x11C08, 7),
    (0x11C0A, 0x11C2E, 7),
    (0x11C2F, 0x11C2F, 10),
    (0x11C30, 0x11C36, 12),
    (0x11C38, 0x11C3D, 12),
    (0x11C3E, 0x11C3E, 10),
    (0x11C3F, 0x11C3F, 12),
    (0x11C40, 0x11C40, 7),
    (0x11C41, 0x11C45, 21),
    (0x11C50, 0x11C59, 13),
    (0x11C5A, 0x11C6C, 15),
    (0x11C70, 0x11C71, 21),
    (0x11C72, 0x11C8F, 7),
    (0x11C92, 0x11CA7, 12),
    (0x11CA9, 0x11CA9, 10),
    (0x11CAA, 0x11CB0, 12),
    (0x11CB1, 0x11CB1, 10),
    (0x11CB2, 0x11CB3, 12),
    (0x11CB4, 0x11CB4, 10),
    (0x11CB5, 0x11CB6, 12),
    (0x11D00, 0x11D06, 7),
    (0x11D08, 0x11D09, 7),
    (0x11D0B, 0x11D30, 7),
    (0x11D31, 0x11D36, 12),
    (0x11D3A, 0x11D3A, 12),
    (0x11D3C, 0x11D3D, 12),
    (0x11D3F, 0x11D45, 12),
    (0x11D46, 0x11D46, 7),
    (0x11D47, 0x11D47, 12),
    (0x11D50, 0x11D59, 13),
    (0x11D60, 0x11D65, 7),
    (0x11D67, 0x11D68, 7),
    (0x11D6A, 0x11D89, 7),
    (0x11D8A, 0x11D8E, 10),
    (0x11D90, 0x11D91, 12),
    (0x11D93, 0x11D94, 10),
    (0x11D95, 0x11D95, 12),
    (0x11D96, 0x11D96, 10),
    (0x11D97, 0x11D97, 12),
    (0x11D98, 0x11D98, 7),
    (0x11DA0, 0x11DA9, 13),
    (0x11EE0, 0x11EF2, 7),
    (0x11EF3, 0x11EF4, 12),
    (0x11EF5, 0x11EF6, 10),
    (0x11EF7, 0x11EF8, 21),
    (0x11F00, 0x11F01, 12),
    (0x11F02, 0x11F02, 7),
    (0x11F03, 0x11F03, 10),
    (0x11F04, 0x11F10, 7),
    (0x11F12, 0x11F33, 7),
    (0x11F34, 0x11F35, 10),
    (0x11F36, 0x11F3A, 12),
    (0x11F3E, 0x11F3F, 10),
    (0x11F40, 0x11F40, 12),
    (0x11F41, 0x11F41, 10),
    (0x11F42, 0x11F42, 12),
    (0x11F43, 0x11F4F, 21),
    (0x11F50, 0x11F59, 13),
    (0x11FB0, 0x11FB0, 7),
    (0x11FC0, 0x11FD4, 15),
    (0x11FD5, 0x11FDC, 26),
    (0x11FDD, 0x11FE0, 23),
    (0x11FE1, 0x11FF1, 26),
    (0x11FFF, 0x11FFF, 21),
    (0x12000, 0x12399, 7),
    (0x12400, 0x1246E, 14),
    (0x12470, 0x12474, 21),
    (0x12480, 0x12543, 7),
    (0x12F90, 0x12FF0, 7),
    (0x12FF1, 0x12FF2, 21),
    (0x13000, 0x1342F, 7),
    (0x13430, 0x1343F, 1),
    (0x13440, 0x13440, 12),
    (0x13441, 0x13446, 7),
    (0x13447, 0x13455, 12),
    (0x14400, 0x14646, 7),
    (0x16800, 0x16A38, 7),
    (0x16A40, 0x16A5E, 7),
    (0x16A60, 0x16A69, 13),
    (0x16A6E, 0x16A6F, 21),
    (0x16A70, 0x16ABE, 7),
    (0x16AC0, 0x16AC9, 13),
    (0x16AD0, 0x16AED, 7),
    (0x16AF0, 0x16AF4, 12),
    (0x16AF5, 0x16AF5, 21),
    (0x16B00, 0x16B2F, 7),
    (0x16B30, 0x16B36, 12),
    (0x16B37, 0x16B3B, 21),
    (0x16B3C, 0x16B3F, 26),
    (0x16B40, 0x16B43, 6),
    (0x16B44, 0x16B44, 21),
    (0x16B45, 0x16B45, 26),
    (0x16B50, 0x16B59, 13),
    (0x16B5B, 0x16B61, 15),
    (0x16B63, 0x16B77, 7),
    (0x16B7D, 0x16B8F, 7),
    (0x16E40, 0x16E5F, 9),
    (0x16E60, 0x16E7F, 5),
    (0x16E80, 0x16E96, 15),
    (0x16E97, 0x16E9A, 21),
    (0x16F00, 0x16F4A, 7),
    (0x16F4F, 0x16F4F, 12),
    (0x16F50, 0x16F50, 7),
    (0x16F51, 0x16F87, 10),
    (0x16F8F, 0x16F92, 12),
    (0x16F93, 0x16F9F, 6),
    (0x16FE0, 0x16FE1, 6),
    (0x16FE2, 0x16FE2, 21),
    (0x16FE3, 0x16FE3, 6),
    (0x16FE4, 0x16FE4, 12),
    (0x16FF0, 0x16FF1, 10),
    (0x17000, 0x187F7, 7),
    (0x18800, 0x18CD5, 7),
    (0x18D00, 0x18D08, 7),
    (0x1AFF0, 0x1AFF3, 6),
    (0x1AFF5, 0x1AFFB, 6),
    (0x1AFFD, 0x1AFFE, 6),
    (0x1B000, 0x1B122, 7),
    (0x1B132, 0x1B132, 7),
    (0x1B150, 0x1B152, 7),
    (0x1B155, 0x1B155, 7),
    (0x1B164, 0x1B167, 7),
    (0x1B170, 0x1B2FB, 7),
    (0x1BC00, 0x1BC6A, 7),
    (0x1BC70, 0x1BC7C, 7),
    (0x1BC80, 0x1BC88, 7),
    (0x1BC90, 0x1BC99, 7),
    (0x1BC9C, 0x1BC9C, 26),
    (0x1BC9D, 0x1BC9E, 12),
    (0x1BC9F, 0x1BC9F, 21),
    (0x1BCA0, 0x1BCA3, 1),
    (0x1CF00, 0x1CF2D, 12),
    (0x1CF30, 0x1CF46, 12),
    (0x1CF50, 0x1CFC3, 26),
    (0x1D000, 0x1D0F5, 26),
    (0x1D100, 0x1D126, 26),
    (0x1D129, 0x1D164, 26),
    (0x1D165, 0x1D166, 10),
    (0x1D167, 0x1D169, 12),
    (0x1D16A, 0x1D16C, 26),
    (0x1D16D, 0x1D172, 10),
    (0x1D173, 0x1D17A, 1),
    (0x1D17B, 0x1D182, 12),
    (0x1D183, 0x1D184, 26),
    (0x1D185, 0x1D18B, 12),
    (0x1D18C, 0x1D1A9, 26),
    (0x1D1AA, 0x1D1AD, 12),
    (0x1D1AE, 0x1D1EA, 26),
    (0x1D200, 0x1D241, 26),
    (0x1D242, 0x1D244, 12),
    (0x1D245, 0x1D245, 26),
    (0x1D2C0, 0x1D2D3, 15),
    (0x1D2E0, 0x1D2F3, 15),
    (0x1D300, 0x1D356, 26),
    (0x1D360, 0x1D378, 15),
    (0x1D400, 0x1D419, 9),
    (0x1D41A, 0x1D433, 5),
    (0x1D434, 0x1D44D, 9),
    (0x1D44E, 0x1D454, 5),
    (0x1D456, 0x1D467, 5),
    (0x1D468, 0x1D481, 9),
    (0x1D482, 0x1D49B, 5),
    (0x1D49C, 0x1D49C, 9),
    (0x1D49E, 0x1D49F, 9),
    (0x1D4A2, 0x1D4A2, 9),
    (0x1D4A5, 0x1D4A6, 9),
    (0x1D4A9, 0x1D4AC, 9),
    (0x1D4AE, 0x1D4B5, 9),
    (0x1D4B6, 0x1D4B9, 5),
    (0x1D4BB, 0x1D4BB, 5),
    (0x1D4BD, 0x1D4C3, 5),
    (0x1D4C5, 0x1D4CF, 5),
    (0x1D4D0, 0x1D4E9, 9),
    (0x1D4EA, 0x1D503, 5),
    (0x1D504, 0x1D505, 9),
    (0x1D507, 0x1D50A, 9),
    (0x1D50D, 0x1D514, 9),
    (0x1D516, 0x1D51C, 9),
    (0x1D51E, 0x1D537, 5),
    (0x1D538, 0x1D539, 9),
    (0x1D53B, 0x1D53E, 9),
    (0x1D540, 0x1D544, 9),
    (0x1D546, 0x1D546, 9),
    (0x1D54A, 0x1D550, 9),
    (0x1D552, 0x1D56B, 5),
    (0x1D56C, 0x1D585, 9),
    (0x1D586, 0x1D59F, 5),
    (0x1D5A0, 0x1D5B9, 9),
    (0x1D5BA, 0x1D5D3, 5),
    (0x1D5D4, 0x1D5ED, 9),
    (0x1D5EE, 0x1D607, 5),
    (0x1D608, 0x1D621, 9),
    (0x1D622, 0x1D63B, 5),
    (0x1D63C, 0x1D655, 9),
    (0x1D656, 0x1D66F, 5),
    (0x1D670, 0x1D689, 9),
    (0x1D68A, 0x1D6A5, 5),
    (0x1D6A8, 0x1D6C0, 9),
    (0x1D6C1, 0x1D6C1, 25),
    (0x1D6C2, 0x1D6DA, 5),
    (0x1D6DB, 0x1D6DB, 25),
    (0x1D6DC, 0x1D6E1, 5),
    (0x1D6E2, 0x1D6FA, 9),
    (0x1D6FB, 0x1D6FB, 25),
    (0x1D6FC, 0x1D714, 5),
    (0x1D715, 0x1D715, 25),
    (0x1D716, 0x1D71B, 5),
    (0x1D71C, 0x1D734, 9),
    (0x1D735, 0x1D735, 25),
    (0x1D736, 0x1D74E, 5),
    (0x1D74F, 0x1D74F, 25),
    (0x1D750, 0x1D755, 5),
    (0x1D756, 0x1D76E, 9),
    (0x1D76F, 0x1D76F, 25),
    (0x1D770, 0x1D788, 5),
    (0x1D789, 0x1D789, 25),
    (0x1D78A, 0x1D78F, 5),
    (0x1D790, 0x1D7A8, 9),
    (0x1D7A9, 0x1D7A9, 25),
    (0x1D7AA, 0x1D7C2, 5),
    (0x1D7C3, 0x1D7C3, 25),
    (0x1D7C4, 0x1D7C9, 5),
    (0x1D7CA, 0x1D7CA, 9),
    (0x1D7CB, 0x1D7CB, 5),
    (0x1D7CE, 0x1D7FF, 13),
    (0x1D800, 0x1D9FF, 26),
    (0x1DA00, 0x1DA36, 12),
    (0x1DA37, 0x1DA3A, 26),
    (0x1DA3B, 0x1DA6C, 12),
    (0x1DA6D, 0x1DA74, 26),
    (0x1DA75, 0x1DA75, 12),
    (0x1DA76, 0x1DA83, 26),
    (0x1DA84, 0x1DA84, 12),
    (0x1DA85, 0x1DA86, 26),
    (0x1DA87, 0x1DA8B, 21),
    (0x1DA9B, 0x1DA9F, 12),
    (0x1DAA1, 0x1DAAF, 12),
    (0x1DF00, 0x1DF09, 5),
    (0x1DF0A, 0x1DF0A, 7),
    (0x1DF0B, 0x1DF1E, 5),
    (0x1DF25, 0x1DF2A, 5),
    (0x1E000, 0x1E006, 12),
    (0x1E008, 0x1E018, 12),
    (0x1E01B, 0x1E021, 12),
    (0x1E023, 0x1E024, 12),
    (0x1E026, 0x1E02A, 12),
    (0x1E030, 0x1E06D, 6),
    (0x1E08F, 0x1E08F, 12),
    (0x1E100, 0x1E12C, 7),
    (0x1E130, 0x1E136, 12),
    (0x1E137, 0x1E13D, 6),
    (0x1E140, 0x1E149, 13),
    (0x1E14E, 0x1E14E, 7),
    (0x1E14F, 0x1E14F, 26),
    (0x1E290, 0x1E2AD, 7),
    (0x1E2AE, 0x1E2AE, 12),
    (0x1E2C0, 0x1E2EB, 7),
    (0x1E2EC, 0x1E2EF, 12),
    (0x1E2F0, 0x1E2F9, 13),
    (0x1E2FF, 0x1E2FF, 23),
    (0x1E4D0, 0x1E4EA, 7),
    (0x1E4EB, 0x1E4EB, 6),
    (0x1E4EC, 0x1E4EF, 12),
    (0x1E4F0, 0x1E4F9, 13),
    (0x1E7E0, 0x1E7E6, 7),
    (0x1E7E8, 0x1E7EB, 7),
    (0x1E7ED, 0x1E7EE, 7),
    (0x1E7F0, 0x1E7FE, 7),
    (0x1E800, 0x1E8C4, 7),
    (0x1E8C7, 0x1E8CF, 15),
    (0x1E8D0, 0x1E8D6, 12),
    (0x1E900, 0x1E921, 9),
    (0x1E922, 0x1E943, 5),
    (0x1E944, 0x1E94A, 12),
    (0x1E94B, 0x1E94B, 6),
    (0x1E950, 0x1E959, 13),
    (0x1E95E, 0x1E95F, 21),
    (0x1EC71, 0x1ECAB, 15),
    (0x1ECAC, 0x1ECAC, 26),
    (0x1ECAD, 0x1ECAF, 15),
    (0x1ECB0, 0x1ECB0, 23),
    (0x1ECB1, 0x1ECB4, 15),
    (0x1ED01, 0x1ED2D, 15),
    (0x1ED2E, 0x1ED2E, 26),
    (0x1ED2F, 0x1ED3D, 15),
    (0x1EE00, 0x1EE03, 7),
    (0x1EE05, 0x1EE1F, 7),
    (0x1EE21, 0x1EE22, 7),
    (0x1EE24, 0x1EE24, 7),
    (0x1EE27, 0x1EE27, 7),
    (0x1EE29, 0x1EE32, 7),
    (0x1EE34, 0x1EE37, 7),
    (0x1EE39, 0x1EE39, 7),
    (0x1EE3B, 0x1EE3B, 7),
    (0x1EE42, 0x1EE42, 7),
    (0x1EE47, 0x1EE47, 7),
    (0x1EE49, 0x1EE49, 7),
    (0x1EE4B, 0x1EE4B, 7),
    (0x1EE4D, 0x1EE4F, 7),
    (0x1EE51, 0x1EE52, 7),
    (0x1EE54, 0x1EE54, 7),
    (0x1EE57, 0x1EE57, 7),
    (0x1EE59, 0x1EE59, 7),
    (0x1EE5B, 0x1EE5B, 7),
    (0x1EE5D, 0x1EE5D, 7),
    (0x1EE5F, 0x1EE5F, 7),
    (0x1EE61, 0x1EE62, 7),
    (0x1EE64, 0x1EE64, 7),
    (0x1EE67, 0x1EE6A, 7),
    (0x1EE6C, 0x1EE72, 7),
    (0x1EE74, 0x1EE77, 7),
    (0x1EE79, 0x1EE7C, 7),
    (0x1EE7E, 0x1EE7E, 7),
    (0x1EE80, 0x1EE89, 7),
    (0x1EE8B, 0x1EE9B, 7),
    (0x1EEA1, 0x1EEA3, 7),
    (0x1EEA5, 0x1EEA9, 7),
    (0x1EEAB, 0x1EEBB, 7),
    (0x1EEF0, 0x1EEF1, 25),
    (0x1F000, 0x1F02B, 26),
    (0x1F030, 0x1F093, 26),
    (0x1F0A0, 0x1F0AE, 26),
    (0x1F0B1, 0x1F0BF, 26),
    (0x1F0C1, 0x1F0CF, 26),
    (0x1F0D1, 0x1F0F5, 26),
    (0x1F100, 0x1F10C, 15),
    (0x1F10D, 0x1F1AD, 26),
    (0x1F1E6, 0x1F202, 26),
    (0x1F210, 0x1F23B, 26),
    (0x1F240, 0x1F248, 26),
    (0x1F250, 0x1F251, 26),
    (0x1F260, 0x1F265, 26),
    (0x1F300, 0x1F3FA, 26),
    (0x1F3FB, 0x1F3FF, 24),
    (0x1F400, 0x1F6D7, 26),
    (0x1F6DC, 0x1F6EC, 26),
    (0x1F6F0, 0x1F6FC, 26),
    (0x1F700, 0x1F776, 26),
    (0x1F77B, 0x1F7D9, 26),
    (0x1F7E0, 0x1F7EB, 26),
    (0x1F7F0, 0x1F7F0, 26),
    (0x1F800, 0x1F80B, 26),
    (0x1F810, 0x1F847, 26),
    (0x1F850, 0x1F859, 26),
    (0x1F860, 0x1F887, 26),
    (0x1F890, 0x1F8AD, 26),
    (0x1F8B0, 0x1F8B1, 26),
    (0x1F900, 0x1FA53, 26),
    (0x1FA60, 0x1FA6D, 26),
    (0x1FA70, 0x1FA7C, 26),
    (0x1FA80, 0x1FA88, 26),
    (0x1FA90, 0x1FABD, 26),
    (0x1FABF, 0x1FAC5, 26),
    (0x1FACE, 0x1FADB, 26),
    (0x1FAE0, 0x1FAE8, 26),
    (0x1FAF0, 0x1FAF8, 26),
    (0x1FB00, 0x1FB92, 26),
    (0x1FB94, 0x1FBCA, 26),
    (0x1FBF0, 0x1FBF9, 13),
    (0x20000, 0x2A6DF, 7),
    (0x2A700, 0x2B739, 7),
    (0x2B740, 0x2B81D, 7),
    (0x2B820, 0x2CEA1, 7),
    (0x2CEB0, 0x2EBE0, 7),
    (0x2EBF0, 0x2EE5D, 7),
    (0x2F800, 0x2FA1D, 7),
    (0x30000, 0x3134A, 7),
    (0x31350, 0x323AF, 7),
    (0xE0001, 0xE0001, 1),
    (0xE0020, 0xE007F, 1),
    (0xE0100, 0xE01EF, 12),
    (0xF0000, 0xFFFFD, 3),
    (0x100000, 0x10FFFD, 3),
];
